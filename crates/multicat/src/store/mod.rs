//! Category store abstraction.
//!
//! All taxonomy reads and association writes go through
//! [`CategoryStore`], so hosts can swap the direct database
//! implementation for a decorated or in-memory one without changing any
//! call site.

mod direct;

use async_trait::async_trait;

pub use direct::DirectCategoryStore;

use crate::error::StoreResult;
use crate::models::Category;

/// Storage boundary for the association layer.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Categories of the configured taxonomy in tree order (`lft`
    /// ascending), trashed entries excluded.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Additional category ids linked to `item_id`, ascending; empty
    /// when none.
    async fn item_categories(&self, item_id: i64) -> StoreResult<Vec<i64>>;

    /// Replace the full additional-category set for `item_id`.
    ///
    /// Implementations sanitize ids (drop non-positive, collapse
    /// duplicates) and treat an empty set as "clear all". The replace is
    /// atomic per item: a failure must not leave a partially-replaced
    /// set behind.
    async fn replace_item_categories(&self, item_id: i64, category_ids: &[i64]) -> StoreResult<()>;
}
