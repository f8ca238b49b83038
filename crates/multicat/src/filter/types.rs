//! Filter state types for the listing read path.

use serde::{Deserialize, Serialize};

/// A category filter as requested by a host listing.
///
/// An empty `category_ids` list means "no filter requested", which is a
/// different outcome from a filter that resolves to nothing; see
/// [`ResolvedCategories`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// Requested category ids; empty means unfiltered.
    #[serde(default)]
    pub category_ids: Vec<i64>,

    /// Also match items in descendant categories.
    #[serde(default)]
    pub include_descendants: bool,

    /// How many levels below each seed to include; `None` is unlimited
    /// and zero admits no descendants. Ignored unless
    /// `include_descendants` is set.
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl CategoryFilter {
    /// Filter matching the given categories exactly.
    pub fn new(category_ids: Vec<i64>) -> Self {
        Self {
            category_ids,
            ..Self::default()
        }
    }

    /// Extend the filter to descendant categories, optionally capped.
    pub fn with_descendants(mut self, max_depth: Option<u32>) -> Self {
        self.include_descendants = true;
        self.max_depth = max_depth;
        self
    }
}

/// Outcome of resolving a [`CategoryFilter`].
///
/// A request without a filter leaves the base query untouched, while a
/// filter that resolved to nothing must match zero rows; `Unfiltered`
/// and `NoMatch` keep the two outcomes from being conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedCategories {
    /// No category filter was requested.
    Unfiltered,

    /// A filter was requested but resolved to no usable category.
    NoMatch,

    /// Concrete category ids the listing must match against.
    Ids(Vec<i64>),
}

impl ResolvedCategories {
    /// The resolved ids, when any.
    pub fn ids(&self) -> Option<&[i64]> {
        match self {
            Self::Ids(ids) => Some(ids),
            _ => None,
        }
    }
}
