//! In-memory session

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sc_core::errors::DomainResult;
use sc_core::services::SessionStore;

/// A single visitor's session; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    id: String,
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySession {
    /// Start an empty session with a fresh random id
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data: Arc::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn clear(&self) {
        self.data.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.data
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.data.write().await.remove(key);
        Ok(())
    }
}
