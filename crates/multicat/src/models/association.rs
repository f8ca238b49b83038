//! Bridge-table rows linking items to additional categories.
//!
//! One row per extra category. The set is replaced wholesale on every
//! save, so edits can never strand rows belonging to removed selections.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::ids::sanitize_ids;

/// An additional category assignment for a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemCategory {
    /// Content item identifier.
    pub item_id: i64,

    /// Category assigned in addition to the item's primary one.
    pub category_id: i64,
}

impl ItemCategory {
    /// Additional category ids linked to an item, ascending; empty when
    /// none.
    pub async fn list_for_item(pool: &PgPool, item_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT category_id FROM item_category WHERE item_id = $1 ORDER BY category_id",
        )
        .bind(item_id)
        .fetch_all(pool)
        .await
        .context("failed to list item categories")?;

        Ok(ids)
    }

    /// Replace an item's additional categories with `category_ids`.
    ///
    /// Ids are sanitized before writing and an empty set clears every
    /// row. Delete and insert run inside one transaction so a failure
    /// cannot leave a partially-replaced set behind.
    pub async fn replace_for_item(pool: &PgPool, item_id: i64, category_ids: &[i64]) -> Result<()> {
        let clean = sanitize_ids(category_ids);

        let mut tx = pool.begin().await.context("failed to start transaction")?;

        sqlx::query("DELETE FROM item_category WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .context("failed to delete existing item categories")?;

        for category_id in &clean {
            sqlx::query("INSERT INTO item_category (item_id, category_id) VALUES ($1, $2)")
                .bind(item_id)
                .bind(category_id)
                .execute(&mut *tx)
                .await
                .context("failed to insert item category")?;
        }

        tx.commit().await.context("failed to commit transaction")?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn association_serialization() {
        let row = ItemCategory {
            item_id: 12,
            category_id: 7,
        };

        let json = serde_json::to_string(&row).unwrap();
        let parsed: ItemCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
