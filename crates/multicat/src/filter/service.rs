//! Filter resolution against the category store.

use std::sync::Arc;

use crate::filter::expander::expand;
use crate::filter::types::{CategoryFilter, ResolvedCategories};
use crate::ids::sanitize_ids;
use crate::store::CategoryStore;

/// Resolves requested category filters for the listing read path.
pub struct FilterService {
    store: Arc<dyn CategoryStore>,
}

impl FilterService {
    /// Create a service reading tree metadata from `store`.
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Resolve `filter` to the concrete outcome a listing query uses.
    ///
    /// An absent filter and a filter resolved to nothing are distinct
    /// outcomes; see [`ResolvedCategories`]. The store is only consulted
    /// when descendants are requested, and a failure there degrades to
    /// the sanitized seeds with a warning so the listing still completes.
    pub async fn resolve(&self, filter: &CategoryFilter) -> ResolvedCategories {
        if filter.category_ids.is_empty() {
            return ResolvedCategories::Unfiltered;
        }

        let seeds = sanitize_ids(&filter.category_ids);
        if seeds.is_empty() {
            return ResolvedCategories::NoMatch;
        }

        if !filter.include_descendants {
            return ResolvedCategories::Ids(seeds);
        }

        match self.store.list_categories().await {
            Ok(categories) => {
                let resolved = expand(&categories, &seeds, true, filter.max_depth);
                tracing::debug!(
                    seeds = seeds.len(),
                    resolved = resolved.len(),
                    max_depth = ?filter.max_depth,
                    "expanded category filter"
                );
                ResolvedCategories::Ids(resolved)
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "category tree unavailable; matching seed categories only"
                );
                ResolvedCategories::Ids(seeds)
            }
        }
    }
}
