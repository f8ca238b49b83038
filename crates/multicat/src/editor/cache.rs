//! Pending-edit selection cache.
//!
//! When the host bounces an edit form back (a validation failure
//! elsewhere on the form), the user's category picks live here until the
//! next render, keyed by an opaque per-form string the host chooses. The
//! trait keeps the workflow independent of any ambient session
//! machinery.

use async_trait::async_trait;
use dashmap::DashMap;

/// Store for selections attempted but not yet persisted.
#[async_trait]
pub trait PendingEditCache: Send + Sync {
    /// Selections remembered under `key`, if any.
    async fn get(&self, key: &str) -> Option<Vec<i64>>;

    /// Remember `selections` under `key`, replacing previous ones.
    async fn put(&self, key: &str, selections: Vec<i64>);

    /// Forget the selections under `key`.
    async fn remove(&self, key: &str);
}

/// Process-local [`PendingEditCache`].
///
/// Suitable for single-process hosts and tests; multi-instance hosts
/// should adapt their session store instead.
#[derive(Debug, Default)]
pub struct MemoryPendingEditCache {
    entries: DashMap<String, Vec<i64>>,
}

impl MemoryPendingEditCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PendingEditCache for MemoryPendingEditCache {
    async fn get(&self, key: &str) -> Option<Vec<i64>> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    async fn put(&self, key: &str, selections: Vec<i64>) {
        self.entries.insert(key.to_string(), selections);
    }

    async fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}
