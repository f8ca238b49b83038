//! Association editing workflow.
//!
//! The write-time half of the association layer: loading current
//! selections for an edit form, building the option list, and persisting
//! a validated set after the host commits its primary save.

pub mod cache;
pub mod service;

pub use cache::{MemoryPendingEditCache, PendingEditCache};
pub use service::{CategoryOption, EditorService};
