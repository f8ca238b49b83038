//! Listing query rewriting using SeaQuery.
//!
//! Augments a host listing query so items match by primary category or
//! by any bridge-table association, without duplicating items whose
//! associations match more than once.

use sea_query::{
    Alias, Asterisk, Cond, Expr, ExprTrait, Func, JoinType, Order, PostgresQueryBuilder, Query,
    SelectStatement,
};

use crate::filter::types::ResolvedCategories;

/// Alias the bridge table is joined under.
const BRIDGE_ALIAS: &str = "mc";

/// Bridge table holding additional category assignments.
const BRIDGE_TABLE: &str = "item_category";

/// Rewrites listing queries to honor additional category assignments.
pub struct ListingQueryBuilder {
    base_table: String,
    id_column: String,
    category_column: String,
}

impl ListingQueryBuilder {
    /// Create a builder for a listing over `base_table`.
    ///
    /// Assumes `id` and `category_id` column names on the base table;
    /// see [`with_columns`](Self::with_columns) when the host differs.
    pub fn new(base_table: &str) -> Self {
        Self {
            base_table: base_table.to_string(),
            id_column: "id".to_string(),
            category_column: "category_id".to_string(),
        }
    }

    /// Override the item identity and primary category column names.
    pub fn with_columns(mut self, id_column: &str, category_column: &str) -> Self {
        self.id_column = id_column.to_string();
        self.category_column = category_column.to_string();
        self
    }

    /// Apply a resolved category filter to `query`.
    ///
    /// `Unfiltered` leaves the query untouched. `NoMatch` (and an empty
    /// id set) appends a condition no row satisfies: a filter that
    /// resolved to nothing must not fall back to the unfiltered
    /// universe. A non-empty id set joins the bridge table, matches by
    /// primary or associated category, and groups on the item id so
    /// multi-association items appear at most once.
    pub fn apply(&self, query: &mut SelectStatement, resolved: &ResolvedCategories) {
        self.apply_inner(query, resolved, true);
    }

    /// Build a complete paginated listing statement.
    pub fn build(&self, resolved: &ResolvedCategories, page: u32, per_page: u32) -> String {
        let mut query = self.base_select();

        self.apply(&mut query, resolved);

        query.order_by(
            (Alias::new(&self.base_table), Alias::new(&self.id_column)),
            Order::Asc,
        );

        let offset = u64::from(page.saturating_sub(1)) * u64::from(per_page);
        query.limit(u64::from(per_page));
        query.offset(offset);

        query.to_string(PostgresQueryBuilder)
    }

    /// Build a COUNT query over the distinct matching items.
    pub fn build_count(&self, resolved: &ResolvedCategories) -> String {
        let mut query = Query::select();

        query
            .expr(Func::count_distinct(Expr::col((
                Alias::new(&self.base_table),
                Alias::new(&self.id_column),
            ))))
            .from(Alias::new(&self.base_table));

        // COUNT(DISTINCT id) already collapses join fan-out; grouping
        // would turn the total into one row per item.
        self.apply_inner(&mut query, resolved, false);

        query.to_string(PostgresQueryBuilder)
    }

    fn apply_inner(&self, query: &mut SelectStatement, resolved: &ResolvedCategories, group: bool) {
        let ids = match resolved {
            ResolvedCategories::Unfiltered => return,
            ResolvedCategories::NoMatch => {
                query.and_where(Expr::cust("FALSE"));
                return;
            }
            ResolvedCategories::Ids(ids) if ids.is_empty() => {
                query.and_where(Expr::cust("FALSE"));
                return;
            }
            ResolvedCategories::Ids(ids) => ids,
        };

        let on_condition = Expr::col((Alias::new(BRIDGE_ALIAS), Alias::new("item_id")))
            .equals((Alias::new(&self.base_table), Alias::new(&self.id_column)));

        query.join_as(
            JoinType::LeftJoin,
            Alias::new(BRIDGE_TABLE),
            Alias::new(BRIDGE_ALIAS),
            on_condition,
        );

        let primary = Expr::col((
            Alias::new(&self.base_table),
            Alias::new(&self.category_column),
        ))
        .is_in(ids.iter().copied());
        let associated = Expr::col((Alias::new(BRIDGE_ALIAS), Alias::new("category_id")))
            .is_in(ids.iter().copied());

        query.cond_where(Cond::any().add(primary).add(associated));

        if group {
            query.group_by_col((Alias::new(&self.base_table), Alias::new(&self.id_column)));
        }
    }

    fn base_select(&self) -> SelectStatement {
        let mut query = Query::select();
        query
            .column((Alias::new(&self.base_table), Asterisk))
            .from(Alias::new(&self.base_table));
        query
    }
}
