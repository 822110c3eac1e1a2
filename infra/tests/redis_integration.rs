//! Integration tests for the Redis-backed verification store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p sc_infra --test redis_integration -- --ignored

use std::sync::Arc;

use sc_core::services::{CacheVerificationStore, KeyValueStore, VerificationServiceConfig};
use sc_core::ProviderConfig;
use sc_infra::cache::{CacheConfig, RedisClient};
use sc_infra::sms::{MockSmsProvider, ProviderRegistry};

fn config() -> CacheConfig {
    CacheConfig::from_env().with_prefix(format!("smscode-test-{}", uuid::Uuid::new_v4().simple()))
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(config()).await.unwrap();
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_set_get_delete_with_ttl() {
    let client = RedisClient::new(config()).await.unwrap();

    client.set("13800138000_sent", "1", Some(60)).await.unwrap();
    assert_eq!(
        client.get("13800138000_sent").await.unwrap().as_deref(),
        Some("1")
    );
    let ttl = client.ttl("13800138000_sent").await.unwrap().unwrap();
    assert!(ttl > 0 && ttl <= 60);

    assert!(client.delete("13800138000_sent").await.unwrap());
    assert!(!client.has("13800138000_sent").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_verification_flow_on_redis() {
    let client = Arc::new(RedisClient::new(config()).await.unwrap());
    let provider = MockSmsProvider::new("aliyun");
    let registry = Arc::new(ProviderRegistry::new().with_provider(Arc::new(provider.clone())));
    let store = CacheVerificationStore::init(
        registry,
        client.clone(),
        VerificationServiceConfig::default().with_provider(ProviderConfig::new("aliyun")),
    )
    .await;

    let result = store.create("13800138000").await;
    assert!(result.is_success());
    assert!(!store.create("13800138000").await.is_success());

    assert!(store.validate("13800138000", result.code()).await);
    assert!(!client.has("13800138000_code").await.unwrap());
    assert!(client.has("13800138000_sent").await.unwrap());

    client.delete("13800138000_sent").await.unwrap();
}
