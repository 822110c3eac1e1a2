//! Collaborator traits for SMS dispatch and state storage

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::DomainResult;

/// Template variables sent along with an SMS, e.g. `{"code": "042917"}`
pub type TemplateVariables = HashMap<String, String>;

/// Trait for the SMS transport
///
/// Any error means the provider did not deliver and the next one should be tried.
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Send a templated message through the named provider
    async fn send(
        &self,
        provider: &str,
        mobile: &str,
        variables: &TemplateVariables,
        template_id: Option<&str>,
    ) -> DomainResult<()>;
}

/// Trait for TTL-governed key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a live value
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store a value; `ttl_seconds` of `None` uses the store's default lifetime
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> DomainResult<()>;

    /// Delete a value, returning whether it existed
    async fn delete(&self, key: &str) -> DomainResult<bool>;

    /// Check whether a live value exists
    async fn has(&self, key: &str) -> DomainResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Remove persisted entries older than `lifetime_seconds`
    ///
    /// Returns how many entries were removed. Backends that expire entries on
    /// their own have nothing to collect.
    async fn collect_garbage(&self, _lifetime_seconds: u64) -> DomainResult<usize> {
        Ok(0)
    }
}

/// Trait for request-scoped session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    async fn delete(&self, key: &str) -> DomainResult<()>;
}
