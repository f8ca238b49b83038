//! Multicat test utilities.
//!
//! Helpers for integration testing: nested-set tree fixtures, an
//! in-memory category store honoring the same contract as the database
//! implementation, and a failure-injecting store for soft-fail paths.

use async_trait::async_trait;
use dashmap::DashMap;

use multicat::error::{StoreError, StoreResult};
use multicat::ids::sanitize_ids;
use multicat::models::{Category, CategoryStatus};
use multicat::store::CategoryStore;

/// Create a published category fixture with explicit nested-set
/// coordinates in the default test taxonomy.
pub fn category(id: i64, title: &str, level: i32, lft: i64, rgt: i64) -> Category {
    Category {
        id,
        taxonomy: "content".to_string(),
        title: title.to_string(),
        level,
        status: CategoryStatus::Published,
        lft,
        rgt,
    }
}

/// Builder producing nested-set taxonomy fixtures.
#[derive(Debug, Default)]
pub struct CategoryTreeBuilder {
    categories: Vec<Category>,
}

impl CategoryTreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with explicit nested-set coordinates.
    pub fn with(mut self, id: i64, title: &str, level: i32, lft: i64, rgt: i64) -> Self {
        self.categories.push(category(id, title, level, lft, rgt));
        self
    }

    /// Mark the most recently added category unpublished.
    pub fn unpublished(self) -> Self {
        self.with_status(CategoryStatus::Unpublished)
    }

    /// Mark the most recently added category archived.
    pub fn archived(self) -> Self {
        self.with_status(CategoryStatus::Archived)
    }

    /// Mark the most recently added category trashed.
    pub fn trashed(self) -> Self {
        self.with_status(CategoryStatus::Trashed)
    }

    /// Set the status of the most recently added category.
    pub fn with_status(mut self, status: CategoryStatus) -> Self {
        if let Some(last) = self.categories.last_mut() {
            last.status = status;
        }
        self
    }

    /// The finished fixture, in tree order.
    pub fn build(mut self) -> Vec<Category> {
        self.categories.sort_by_key(|c| c.lft);
        self.categories
    }
}

/// The four-node sample tree used across the integration suites: root
/// (1) spans [1,10] with child A (2) at [2,5], grandchild B (3) at
/// [3,4], and sibling C (4) at [6,9].
pub fn sample_tree() -> Vec<Category> {
    CategoryTreeBuilder::new()
        .with(1, "Root", 1, 1, 10)
        .with(2, "A", 2, 2, 5)
        .with(3, "B", 3, 3, 4)
        .with(4, "C", 2, 6, 9)
        .build()
}

/// In-memory [`CategoryStore`] mirroring the database implementation's
/// contract: tree-ordered listing with trashed entries excluded,
/// ascending association reads, sanitized wholesale replace.
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    categories: Vec<Category>,
    associations: DashMap<i64, Vec<i64>>,
}

impl MemoryCategoryStore {
    /// Create a store over the given taxonomy fixture.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            associations: DashMap::new(),
        }
    }

    /// Seed an item's association rows directly, bypassing sanitation.
    pub fn seed_associations(&self, item_id: i64, category_ids: Vec<i64>) {
        self.associations.insert(item_id, category_ids);
    }

    /// Number of items that currently have association rows.
    pub fn items_with_associations(&self) -> usize {
        self.associations.len()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .filter(|c| c.status != CategoryStatus::Trashed)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.lft);
        Ok(categories)
    }

    async fn item_categories(&self, item_id: i64) -> StoreResult<Vec<i64>> {
        let mut ids = self
            .associations
            .get(&item_id)
            .map(|entry| entry.clone())
            .unwrap_or_default();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn replace_item_categories(&self, item_id: i64, category_ids: &[i64]) -> StoreResult<()> {
        let clean = sanitize_ids(category_ids);
        if clean.is_empty() {
            self.associations.remove(&item_id);
        } else {
            self.associations.insert(item_id, clean);
        }
        Ok(())
    }
}

/// [`CategoryStore`] whose every operation fails, for exercising
/// soft-fail paths.
#[derive(Debug, Default)]
pub struct FailingCategoryStore;

#[async_trait]
impl CategoryStore for FailingCategoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Err(StoreError::Unavailable(anyhow::anyhow!("store offline")))
    }

    async fn item_categories(&self, _item_id: i64) -> StoreResult<Vec<i64>> {
        Err(StoreError::Unavailable(anyhow::anyhow!("store offline")))
    }

    async fn replace_item_categories(
        &self,
        _item_id: i64,
        _category_ids: &[i64],
    ) -> StoreResult<()> {
        Err(StoreError::WriteFailed(anyhow::anyhow!("store offline")))
    }
}
