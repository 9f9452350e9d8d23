use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-hostname critical sections for the validate-then-write path.
///
/// Writers on the same hostname take turns; writers on unrelated
/// hostnames proceed in parallel. Reads never touch this table.
#[derive(Default)]
pub struct HostnameLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl HostnameLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    pub async fn acquire(&self, hostname: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(hostname.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}
