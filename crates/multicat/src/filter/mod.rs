//! Category filter resolution for listing queries.
//!
//! The read-time half of the association layer:
//! - CategoryFilter: the filter a host listing request asks for
//! - expand: nested-set descendant expansion with per-seed depth caps
//! - ListingQueryBuilder: rewrites a listing query to honor associations
//! - FilterService: resolves requested filters against the category store

pub mod expander;
pub mod query_builder;
pub mod service;
pub mod types;

pub use expander::expand;
pub use query_builder::ListingQueryBuilder;
pub use service::FilterService;
pub use types::{CategoryFilter, ResolvedCategories};
