//! Direct database implementation of the category store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::CategoryStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Category, ItemCategory};

/// [`CategoryStore`] backed directly by the host's PostgreSQL database.
#[derive(Clone)]
pub struct DirectCategoryStore {
    pool: PgPool,
    taxonomy: String,
}

impl DirectCategoryStore {
    /// Create a store reading the given taxonomy tree.
    pub fn new(pool: PgPool, taxonomy: &str) -> Self {
        Self {
            pool,
            taxonomy: taxonomy.to_string(),
        }
    }

    /// The taxonomy this store reads.
    pub fn taxonomy(&self) -> &str {
        &self.taxonomy
    }
}

#[async_trait]
impl CategoryStore for DirectCategoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Category::list(&self.pool, &self.taxonomy)
            .await
            .map_err(StoreError::Unavailable)
    }

    async fn item_categories(&self, item_id: i64) -> StoreResult<Vec<i64>> {
        ItemCategory::list_for_item(&self.pool, item_id)
            .await
            .map_err(StoreError::Unavailable)
    }

    async fn replace_item_categories(&self, item_id: i64, category_ids: &[i64]) -> StoreResult<()> {
        ItemCategory::replace_for_item(&self.pool, item_id, category_ids)
            .await
            .map_err(StoreError::WriteFailed)
    }
}
