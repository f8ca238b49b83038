//! Category taxonomy rows read from the host store.
//!
//! The taxonomy is host-owned and read-only here. Categories carry
//! nested-set bounds (`lft`/`rgt`) and a depth (`level`) maintained by
//! the host; scanning rows by ascending `lft` is a pre-order tree walk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Publication status of a category, stored as `SMALLINT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
pub enum CategoryStatus {
    /// Removed from every listing and selector.
    Trashed = -2,

    /// Retired but still selectable.
    Archived = -1,

    /// Hidden from visitors, selectable by editors.
    Unpublished = 0,

    /// Visible everywhere.
    Published = 1,
}

impl CategoryStatus {
    /// Whether editors may pick this category at all.
    pub fn is_selectable(self) -> bool {
        self != Self::Trashed
    }

    /// Whether the category is live for visitors.
    pub fn is_published(self) -> bool {
        self == Self::Published
    }
}

/// A category in a nested-set taxonomy tree.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Host-assigned identifier, always positive.
    pub id: i64,

    /// Taxonomy tree this category belongs to.
    pub taxonomy: String,

    /// Human-readable label.
    pub title: String,

    /// Depth in the tree; children of the root are level 1.
    pub level: i32,

    /// Publication status.
    pub status: CategoryStatus,

    /// Nested-set left bound.
    pub lft: i64,

    /// Nested-set right bound.
    pub rgt: i64,
}

impl Category {
    /// List a taxonomy's categories in tree order (`lft` ascending),
    /// excluding trashed entries.
    pub async fn list(pool: &PgPool, taxonomy: &str) -> Result<Vec<Self>> {
        let categories = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, taxonomy, title, level, status, lft, rgt
            FROM category
            WHERE taxonomy = $1 AND status <> $2
            ORDER BY lft
            "#,
        )
        .bind(taxonomy)
        .bind(CategoryStatus::Trashed)
        .fetch_all(pool)
        .await
        .context("failed to list categories")?;

        Ok(categories)
    }

    /// Whether `other` lies strictly inside this category's bounds,
    /// i.e. is a proper descendant.
    pub fn contains(&self, other: &Self) -> bool {
        self.lft < other.lft && other.rgt < self.rgt
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn category(id: i64, level: i32, lft: i64, rgt: i64) -> Category {
        Category {
            id,
            taxonomy: "content".to_string(),
            title: format!("Category {id}"),
            level,
            status: CategoryStatus::Published,
            lft,
            rgt,
        }
    }

    #[test]
    fn trashed_is_never_selectable() {
        assert!(!CategoryStatus::Trashed.is_selectable());
        assert!(CategoryStatus::Archived.is_selectable());
        assert!(CategoryStatus::Unpublished.is_selectable());
        assert!(CategoryStatus::Published.is_selectable());
    }

    #[test]
    fn only_published_is_live() {
        assert!(CategoryStatus::Published.is_published());
        assert!(!CategoryStatus::Unpublished.is_published());
        assert!(!CategoryStatus::Archived.is_published());
    }

    #[test]
    fn containment_is_strict() {
        let root = category(1, 1, 1, 10);
        let child = category(2, 2, 2, 5);
        let sibling = category(3, 2, 6, 9);

        assert!(root.contains(&child));
        assert!(root.contains(&sibling));
        assert!(!child.contains(&sibling));
        assert!(!child.contains(&root));
        // A node never contains itself.
        assert!(!root.contains(&root));
    }

    #[test]
    fn category_serialization() {
        let cat = category(7, 2, 4, 5);
        let json = serde_json::to_string(&cat).unwrap();
        assert!(json.contains("Category 7"));

        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.status, CategoryStatus::Published);
    }
}
