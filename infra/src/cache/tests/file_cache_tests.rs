//! Unit tests for the file cache

use chrono::Utc;
use tempfile::TempDir;

use sc_core::services::KeyValueStore;
use sc_shared::SmscodeConfig;

use crate::cache::file_cache::FileEntry;
use crate::cache::FileCache;

fn cache(dir: &TempDir) -> FileCache {
    FileCache::new(dir.path(), 900)
}

#[tokio::test]
async fn test_set_get_delete() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);

    cache.set("13800138000_code", "{\"code\":\"1\"}", None).await.unwrap();
    assert_eq!(
        cache.get("13800138000_code").await.unwrap().as_deref(),
        Some("{\"code\":\"1\"}")
    );
    assert!(cache.has("13800138000_code").await.unwrap());

    assert!(cache.delete("13800138000_code").await.unwrap());
    assert!(!cache.delete("13800138000_code").await.unwrap());
    assert_eq!(cache.get("13800138000_code").await.unwrap(), None);
}

#[tokio::test]
async fn test_missing_root_reads_nothing() {
    let dir = TempDir::new().unwrap();
    let cache = FileCache::new(dir.path().join("not-created"), 900);

    assert_eq!(cache.get("token_abc").await.unwrap(), None);
    assert!(!cache.delete("token_abc").await.unwrap());
}

#[tokio::test]
async fn test_overwrite_replaces_value() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);

    cache.set("k", "first", Some(60)).await.unwrap();
    cache.set("k", "second", Some(60)).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn test_keys_are_hashed_into_shards() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);

    cache.set("../escape", "v", None).await.unwrap();

    let path = cache.path_for("../escape");
    assert!(path.starts_with(dir.path()));
    assert!(path.is_file());
    let shard = path.parent().unwrap().file_name().unwrap().to_str().unwrap();
    assert_eq!(shard.len(), 2);
}

#[tokio::test]
async fn test_expired_entry_is_dropped_on_read() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);
    let path = cache.path_for("13800138000_sent");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();

    let entry = FileEntry {
        expires_at: Some(Utc::now().timestamp() - 1),
        value: "1".to_string(),
    };
    std::fs::write(&path, serde_json::to_vec(&entry).unwrap()).unwrap();

    assert_eq!(cache.get("13800138000_sent").await.unwrap(), None);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_zero_ttl_never_expires() {
    let dir = TempDir::new().unwrap();
    let cache = FileCache::new(dir.path(), 0);

    cache.set("forever", "v", None).await.unwrap();

    let raw = std::fs::read(cache.path_for("forever")).unwrap();
    let entry: FileEntry = serde_json::from_slice(&raw).unwrap();
    assert_eq!(entry.expires_at, None);
    assert_eq!(cache.get("forever").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn test_corrupt_entry_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);
    let path = cache.path_for("broken");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"not json").unwrap();

    assert!(cache.get("broken").await.is_err());
}

#[tokio::test]
async fn test_from_config_uses_cache_path_and_expire() {
    let dir = TempDir::new().unwrap();
    let config = SmscodeConfig::default().with_cache_path(dir.path().join("smscode"));
    let cache = FileCache::from_config(&config);

    assert_eq!(cache.root(), dir.path().join("smscode").as_path());

    cache.set("k", "v", None).await.unwrap();
    let raw = std::fs::read(cache.path_for("k")).unwrap();
    let entry: FileEntry = serde_json::from_slice(&raw).unwrap();
    let remaining = entry.expires_at.unwrap() - Utc::now().timestamp();
    assert!((899..=900).contains(&remaining));
}

#[tokio::test]
async fn test_collect_garbage_on_fresh_cache_keeps_entries() {
    let dir = TempDir::new().unwrap();
    let cache = cache(&dir);
    cache.set("k", "v", None).await.unwrap();

    assert_eq!(cache.collect_garbage(900).await.unwrap(), 0);
    assert!(cache.has("k").await.unwrap());
}
