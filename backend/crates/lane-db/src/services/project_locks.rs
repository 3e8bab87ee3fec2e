use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per project. Position rewrites for a project hold its
/// guard for the whole transaction so renumbering never interleaves.
///
/// Entries nobody holds or waits on are dropped on the next `acquire`, so
/// the map stays as large as the set of projects being written right now.
#[derive(Clone, Default)]
pub struct ProjectLocks {
    locks: Arc<Mutex<HashMap<i64, Arc<Mutex<()>>>>>,
}

impl ProjectLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, project_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Holders and waiters own a clone; the map's copy alone means idle.
            locks.retain(|id, lock| *id == project_id || Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(project_id).or_default())
        };

        lock.lock_owned().await
    }

    #[cfg(test)]
    pub(crate) async fn tracked_projects(&self) -> usize {
        self.locks.lock().await.len()
    }
}
