//! File-backed TTL cache
//!
//! Each key lives in its own JSON file under the cache root, named by the
//! SHA-256 of the key and fanned out by its first two hex digits. Entries
//! carry their own deadline so a read never returns an expired value, while
//! [`sweep_expired_files`] reclaims files nobody reads again.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, warn};

use sc_core::errors::{DomainError, DomainResult};
use sc_core::services::KeyValueStore;
use sc_shared::SmscodeConfig;

use super::gc::sweep_expired_files;
use crate::InfrastructureError;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct FileEntry {
    /// Unix timestamp after which the entry is dead; `None` never expires
    pub(crate) expires_at: Option<i64>,
    pub(crate) value: String,
}

impl FileEntry {
    fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Utc::now().timestamp() >= deadline)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
    default_ttl: u64,
}

impl FileCache {
    /// Cache rooted at `root`; a `default_ttl` of 0 keeps entries forever
    pub fn new(root: impl Into<PathBuf>, default_ttl: u64) -> Self {
        Self {
            root: root.into(),
            default_ttl,
        }
    }

    /// Cache at the configured path, defaulting entry lifetime to the code lifetime
    pub fn from_config(config: &SmscodeConfig) -> Self {
        Self::new(config.cache_path.clone(), config.expire)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn path_for(&self, key: &str) -> PathBuf {
        let digest = hex::encode(Sha256::digest(key.as_bytes()));
        let (shard, name) = digest.split_at(2);
        self.root.join(shard).join(name)
    }

    async fn read_entry(&self, path: &Path) -> Result<Option<FileEntry>, InfrastructureError> {
        match fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, path: &Path) -> Result<bool, InfrastructureError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_entry(&self, path: &Path, entry: &FileEntry) -> Result<(), InfrastructureError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write beside the target and rename so readers never see a partial file
        let staging = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));
        fs::write(&staging, serde_json::to_vec(entry)?).await?;
        if let Err(e) = fs::rename(&staging, path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileCache {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.path_for(key);
        let Some(entry) = self.read_entry(&path).await? else {
            return Ok(None);
        };

        if entry.is_expired() {
            debug!(key = key, "Dropping expired cache entry");
            self.remove(&path).await?;
            return Ok(None);
        }
        Ok(Some(entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> DomainResult<()> {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        let expires_at = (ttl > 0)
            .then(|| i64::try_from(ttl).ok())
            .flatten()
            .map(|ttl| Utc::now().timestamp().saturating_add(ttl));

        let entry = FileEntry {
            expires_at,
            value: value.to_string(),
        };
        self.write_entry(&self.path_for(key), &entry).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        Ok(self.remove(&self.path_for(key)).await?)
    }

    async fn collect_garbage(&self, lifetime_seconds: u64) -> DomainResult<usize> {
        let root = self.root.clone();
        let lifetime = Duration::from_secs(lifetime_seconds);

        let removed = tokio::task::spawn_blocking(move || sweep_expired_files(&root, lifetime))
            .await
            .map_err(|e| {
                warn!(error = %e, "Cache sweep task failed");
                DomainError::Storage {
                    message: format!("cache sweep failed: {}", e),
                }
            })?;

        debug!(root = %self.root.display(), removed = removed, "Swept cache directory");
        Ok(removed)
    }
}
