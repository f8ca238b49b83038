//! Multi-category assignments for single-category content platforms.
//!
//! Content items in the host platform carry exactly one primary
//! category. This crate layers additional assignments on top:
//! - a bridge table holding extra category links per item
//! - read-time query rewriting so listings honor those links, optionally
//!   expanded to descendant categories in the nested-set taxonomy tree
//! - an editing workflow for loading, validating, and persisting the
//!   extra selections alongside the host's own save
//!
//! The host stays in charge of routing, rendering, and executing the
//! queries this crate builds; everything here is consumed in-process.

pub mod config;
pub mod db;
pub mod diagnostics;
pub mod editor;
pub mod error;
pub mod filter;
pub mod ids;
pub mod models;
pub mod store;

pub use config::Config;
pub use editor::{CategoryOption, EditorService, MemoryPendingEditCache, PendingEditCache};
pub use error::{StoreError, StoreResult};
pub use filter::{CategoryFilter, FilterService, ListingQueryBuilder, ResolvedCategories};
pub use models::{Category, CategoryStatus, ItemCategory};
pub use store::{CategoryStore, DirectCategoryStore};
