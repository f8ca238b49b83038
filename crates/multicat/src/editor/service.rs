//! Editing workflow service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::editor::cache::PendingEditCache;
use crate::ids::sanitize_ids;
use crate::store::CategoryStore;

/// One selectable entry in the additional-categories form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Category id submitted back on save.
    pub id: i64,

    /// Title indented "— " per level below the root.
    pub label: String,

    /// Marker for categories that are not live for visitors.
    pub unpublished: bool,
}

/// Orchestrates loading, validating, and persisting additional-category
/// selections around the host's own item save.
pub struct EditorService {
    store: Arc<dyn CategoryStore>,
    pending: Arc<dyn PendingEditCache>,
}

impl EditorService {
    /// Create a workflow over `store` with `pending` as the
    /// unsaved-selection fallback.
    pub fn new(store: Arc<dyn CategoryStore>, pending: Arc<dyn PendingEditCache>) -> Self {
        Self { store, pending }
    }

    /// Selections to prefill an edit form with.
    ///
    /// Preference order: selections already present on the request (a
    /// resubmission after a validation failure, an empty set included)
    /// → the stored set for an existing item → whatever the pending-edit
    /// cache remembers under `pending_key`. A store failure on the
    /// middle branch degrades to no selections; it never falls through
    /// to the cache.
    pub async fn load_selections(
        &self,
        item_id: Option<i64>,
        submitted: Option<&[i64]>,
        pending_key: &str,
    ) -> Vec<i64> {
        if let Some(submitted) = submitted {
            return sanitize_ids(submitted);
        }

        if let Some(item_id) = item_id {
            return match self.store.item_categories(item_id).await {
                Ok(ids) => sanitize_ids(&ids),
                Err(error) => {
                    tracing::warn!(
                        item_id,
                        error = %error,
                        "failed to load stored additional categories"
                    );
                    Vec::new()
                }
            };
        }

        match self.pending.get(pending_key).await {
            Some(selections) => sanitize_ids(&selections),
            None => Vec::new(),
        }
    }

    /// Options for the additional-categories control, in tree order.
    ///
    /// A store failure degrades to an empty list: the host form renders
    /// without the control rather than failing the request.
    pub async fn category_options(&self) -> Vec<CategoryOption> {
        let categories = match self.store.list_categories().await {
            Ok(categories) => categories,
            Err(error) => {
                tracing::warn!(error = %error, "failed to load category options");
                return Vec::new();
            }
        };

        categories
            .iter()
            .filter(|category| category.status.is_selectable())
            .map(|category| {
                let depth = usize::try_from(category.level - 1).unwrap_or(0);
                CategoryOption {
                    id: category.id,
                    label: format!("{}{}", "— ".repeat(depth), category.title),
                    unpublished: !category.status.is_published(),
                }
            })
            .collect()
    }

    /// Persist the additional categories picked for `item_id`.
    ///
    /// Ids are sanitized and the item's primary category is always
    /// excluded, even when submitted. A write failure is logged and
    /// swallowed: the host's primary save has already committed and is
    /// not failed retroactively. There is no retry; the user re-edits
    /// and re-saves to correct a failed write.
    pub async fn save(&self, item_id: i64, primary_category_id: i64, selected: &[i64]) {
        if item_id <= 0 {
            return;
        }

        let filtered: Vec<i64> = sanitize_ids(selected)
            .into_iter()
            .filter(|&id| id != primary_category_id)
            .collect();

        match self.store.replace_item_categories(item_id, &filtered).await {
            Ok(()) => {
                tracing::debug!(
                    item_id,
                    count = filtered.len(),
                    "replaced additional categories"
                );
            }
            Err(error) => {
                tracing::warn!(
                    item_id,
                    error = %error,
                    "failed to persist additional categories"
                );
            }
        }
    }
}
