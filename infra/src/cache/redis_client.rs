//! Redis cache client
//!
//! Backs the verification store with Redis. Entries expire through native
//! key TTLs so there is nothing for the garbage collector to do here.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use sc_core::errors::{DomainError, DomainResult};
use sc_core::services::KeyValueStore;
use sc_shared::CacheConfig;

use crate::InfrastructureError;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Redis cache client with retry logic
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
    config: CacheConfig,
    /// Maximum number of attempts per operation
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Connect using the given configuration, retrying up to 3 times
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(url = %mask_url(&config.url), "Creating Redis client");

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!(error = %e, "Failed to parse Redis URL");
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, max_retries, retry_delay_ms).await?;

        Ok(Self {
            connection,
            config,
            max_retries,
            retry_delay_ms,
        })
    }

    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!(attempts = attempts, "Connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        attempt = attempts,
                        max_retries = max_retries,
                        delay_ms = delay,
                        error = %e,
                        "Failed to connect to Redis, retrying"
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(attempts = attempts, error = %e, "Giving up connecting to Redis");
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// PING the server
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let response = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await?;

        Ok(response == "PONG")
    }

    /// Remaining lifetime of a key, `None` when it is missing or persistent
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        let key = self.config.make_key(key);
        let ttl = self
            .execute_with_retry(move |mut conn| {
                let key = key.clone();
                Box::pin(async move { conn.ttl::<_, i64>(key).await })
            })
            .await?;

        Ok((ttl >= 0).then_some(ttl))
    }

    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(MultiplexedConnection) -> RedisFuture<T>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;
            match operation(self.connection.clone()).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        attempt = attempts,
                        max_retries = self.max_retries,
                        delay_ms = delay,
                        error = %e,
                        "Redis operation failed, retrying"
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(attempts = attempts, error = %e, "Redis operation failed");
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisClient {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let key = self.config.make_key(key);
        debug!(key = %key, "Getting key");

        self.execute_with_retry(move |mut conn| {
            let key = key.clone();
            Box::pin(async move { conn.get::<_, Option<String>>(key).await })
        })
        .await
        .map_err(storage_error)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> DomainResult<()> {
        let key = self.config.make_key(key);
        let ttl = ttl_seconds.unwrap_or(self.config.default_ttl);
        let value = value.to_string();
        debug!(key = %key, ttl = ttl, "Setting key");

        self.execute_with_retry(move |mut conn| {
            let key = key.clone();
            let value = value.clone();
            Box::pin(async move {
                if ttl == 0 {
                    conn.set::<_, _, ()>(key, value).await
                } else {
                    conn.set_ex::<_, _, ()>(key, value, ttl).await
                }
            })
        })
        .await
        .map_err(storage_error)
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let key = self.config.make_key(key);
        debug!(key = %key, "Deleting key");

        let deleted = self
            .execute_with_retry(move |mut conn| {
                let key = key.clone();
                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await
            .map_err(storage_error)?;

        Ok(deleted > 0)
    }

    async fn has(&self, key: &str) -> DomainResult<bool> {
        let key = self.config.make_key(key);

        self.execute_with_retry(move |mut conn| {
            let key = key.clone();
            Box::pin(async move { conn.exists::<_, bool>(key).await })
        })
        .await
        .map_err(storage_error)
    }
}

fn storage_error(e: RedisError) -> DomainError {
    InfrastructureError::Cache(e).into()
}

/// Whether the error is transient and worth another attempt
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Hide credentials in a Redis URL before logging it
pub(crate) fn mask_url(url: &str) -> String {
    if let (Some(at_pos), Some(proto_end)) = (url.find('@'), url.find("://")) {
        return format!("{}****{}", &url[..proto_end + 3], &url[at_pos..]);
    }
    url.to_string()
}
