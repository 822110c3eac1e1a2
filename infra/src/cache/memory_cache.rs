//! In-process TTL cache for tests and single-node development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use sc_core::errors::DomainResult;
use sc_core::services::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    deadline: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.deadline.map(|deadline| now < deadline).unwrap_or(true)
    }
}

/// Cache shared by clones; a `default_ttl` of 0 keeps entries forever
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    default_ttl: u64,
}

impl MemoryCache {
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: Arc::default(),
            default_ttl,
        }
    }

    /// Number of stored entries, expired ones included until swept
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryCache {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> DomainResult<()> {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        // A deadline past what the clock can represent never arrives
        let deadline = (ttl > 0)
            .then(|| Instant::now().checked_add(Duration::from_secs(ttl)))
            .flatten();

        self.entries.write().await.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                deadline,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let now = Instant::now();
        let removed = self.entries.write().await.remove(key);
        Ok(removed.map(|entry| entry.is_live(now)).unwrap_or(false))
    }

    /// Entries carry their own deadlines, so the lifetime is not consulted
    async fn collect_garbage(&self, _lifetime_seconds: u64) -> DomainResult<usize> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        Ok(before - entries.len())
    }
}
