//! Per-mobile issuance locks

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Serializes work keyed by mobile number within one process
///
/// Holding the guard across cooldown check, dispatch and marker write makes the
/// first concurrent request win; later ones observe its cooldown marker.
#[derive(Debug, Default)]
pub struct MobileLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl MobileLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, mobile: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            // Drop entries nobody is holding or waiting on
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(mobile.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
