//! Per-comment mutation locks
//!
//! A read-modify-write on one record (`find` → mutate → `upsert`) must not
//! interleave with another mutator of the same id. Different ids never
//! contend.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use feedback_core::value_objects::CommentId;

/// Lazily created async mutex per comment id
#[derive(Debug, Clone, Default)]
pub struct CommentLocks {
    inner: Arc<DashMap<CommentId, Arc<Mutex<()>>>>,
}

impl CommentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`; released when the guard drops
    pub async fn lock(&self, id: CommentId) -> OwnedMutexGuard<()> {
        // The map shard guard must be released before awaiting
        let mutex = self.inner.entry(id).or_default().value().clone();
        mutex.lock_owned().await
    }

    /// Number of ids that have ever been locked
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
