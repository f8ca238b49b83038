//! Error taxonomy for the category store boundary.

use thiserror::Error;

/// Errors surfaced by [`CategoryStore`](crate::store::CategoryStore)
/// implementations.
///
/// Nothing in this crate turns either variant into a user-facing error:
/// read paths degrade to empty data and the editing workflow treats a
/// failed write as non-fatal to the host's primary save.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve a read.
    #[error("category store unavailable")]
    Unavailable(#[source] anyhow::Error),

    /// Replacing an item's association set did not commit.
    #[error("association write failed")]
    WriteFailed(#[source] anyhow::Error),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
