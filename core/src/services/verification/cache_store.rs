//! Cache-backed verification store
//!
//! Keeps verification state in a TTL key-value store:
//! - `{mobile}_code` - the serialized [`VerificationRecord`], TTL = `expire`
//! - `{mobile}_sent` - the [`CooldownMarker`], fixed 60 second TTL
//! - `token_{token}` - mobile number behind an exchange token, default TTL

use std::sync::Arc;

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use sc_shared::phone::mask_phone_number;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{CooldownMarker, VerificationRecord};
use crate::errors::{DomainResult, VerificationError};

use super::config::VerificationServiceConfig;
use super::issuer::CodeIssuer;
use super::locks::MobileLocks;
use super::traits::{KeyValueStore, SmsTransport};
use super::types::SendResult;

/// Verification store persisting state in a [`KeyValueStore`]
pub struct CacheVerificationStore<T: SmsTransport, K: KeyValueStore> {
    issuer: CodeIssuer<T>,
    cache: Arc<K>,
    config: VerificationServiceConfig,
    locks: MobileLocks,
}

impl<T: SmsTransport, K: KeyValueStore> CacheVerificationStore<T, K> {
    /// Create a store without sweeping the cache
    pub(crate) fn new(transport: Arc<T>, cache: Arc<K>, config: VerificationServiceConfig) -> Self {
        Self {
            issuer: CodeIssuer::new(transport, &config),
            cache,
            config,
            locks: MobileLocks::new(),
        }
    }

    /// Create a store and remove cache entries older than the code lifetime
    ///
    /// The sweep completes before the store is returned.
    pub async fn init(transport: Arc<T>, cache: Arc<K>, config: VerificationServiceConfig) -> Self {
        let store = Self::new(transport, cache, config);
        store.collect_garbage().await;
        store
    }

    /// Sweep expired entries; failures are logged and otherwise ignored
    pub async fn collect_garbage(&self) -> usize {
        match self.cache.collect_garbage(self.config.expire_seconds).await {
            Ok(removed) => {
                if removed > 0 {
                    info!(removed = removed, event = "cache_gc", "Removed expired cache entries");
                }
                removed
            }
            Err(e) => {
                warn!(error = %e, event = "cache_gc_failed", "Cache garbage collection failed");
                0
            }
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a code to a mobile number
    ///
    /// Fails with `CooldownActive` inside the cooldown window and with
    /// `AllProvidersFailed` when no provider delivers. Nothing is stored on failure.
    pub async fn create(&self, mobile: &str) -> SendResult {
        let _guard = self.locks.lock(mobile).await;
        let masked = mask_phone_number(mobile);
        let marker = CooldownMarker::new(mobile);

        match self.cache.has(&marker.cache_key()).await {
            Ok(false) => {}
            Ok(true) => {
                warn!(
                    phone = %masked,
                    event = "rate_limit_exceeded",
                    "Verification code requested during cooldown"
                );
                return SendResult::failed(VerificationError::CooldownActive);
            }
            Err(e) => {
                error!(phone = %masked, error = %e, "Failed to read cooldown marker");
                return SendResult::failed(VerificationError::Storage);
            }
        }

        let Some((code, _provider)) = self.issuer.issue(mobile).await else {
            error!(phone = %masked, event = "sms_all_failed", "No SMS provider delivered the code");
            return SendResult::failed(VerificationError::AllProvidersFailed);
        };

        if let Err(e) = self.save(mobile, &code, &marker).await {
            error!(
                phone = %masked,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store verification code"
            );
            return SendResult::failed(VerificationError::Storage);
        }

        info!(phone = %masked, event = "otp_issued", "Verification code issued");
        SendResult::sent(code)
    }

    /// Check a submitted code; a match consumes the record
    pub async fn validate(&self, mobile: &str, code: &str) -> bool {
        self.check(mobile, code).await.is_ok()
    }

    /// Like [`validate`](Self::validate) but reports why a code was refused
    pub async fn check(&self, mobile: &str, code: &str) -> Result<(), VerificationError> {
        let masked = mask_phone_number(mobile);
        let key = VerificationRecord::cache_key(mobile);

        let stored = match self.cache.get(&key).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                info!(phone = %masked, event = "otp_verification_failed", "No live verification code");
                return Err(VerificationError::ValidationMismatch);
            }
            Err(e) => {
                error!(phone = %masked, error = %e, event = "otp_verification_error", "Failed to read verification code");
                return Err(VerificationError::ValidationMismatch);
            }
        };

        let record: VerificationRecord = match serde_json::from_str(&stored) {
            Ok(record) => record,
            Err(e) => {
                warn!(phone = %masked, error = %e, "Discarding unreadable verification record");
                return Err(VerificationError::ValidationMismatch);
            }
        };

        if record.mobile != mobile || !constant_time_eq(record.code.as_bytes(), code.as_bytes()) {
            info!(phone = %masked, event = "otp_verification_failed", "Verification code mismatch");
            return Err(VerificationError::ValidationMismatch);
        }

        // The store TTL should already have evicted it; checked again in case it lags
        if record.is_expired() {
            let _ = self.cache.delete(&key).await;
            info!(phone = %masked, event = "otp_expired", "Verification code expired");
            return Err(VerificationError::ValidationExpired);
        }

        // One-time use; the cooldown marker stays
        if let Err(e) = self.cache.delete(&key).await {
            warn!(phone = %masked, error = %e, "Failed to delete used verification code");
        }

        info!(phone = %masked, event = "otp_verified_success", "Verification code verified");
        Ok(())
    }

    /// Issue an opaque token that resolves to `mobile`
    ///
    /// The token is a SHA-256 digest of the mobile, the current time and a
    /// random nonce, stored with the cache's default lifetime.
    pub async fn make_mobile_token(&self, mobile: &str) -> DomainResult<String> {
        let token = derive_token(mobile, Utc::now());
        self.set_token(&token, mobile).await?;
        Ok(token)
    }

    /// Store a caller-supplied token for `mobile`
    pub async fn set_token(&self, token: &str, mobile: &str) -> DomainResult<()> {
        self.cache.set(&token_key(token), mobile, None).await
    }

    pub async fn get_mobile_by_token(&self, token: &str) -> DomainResult<Option<String>> {
        self.cache.get(&token_key(token)).await
    }

    async fn save(&self, mobile: &str, code: &str, marker: &CooldownMarker) -> DomainResult<()> {
        let record = VerificationRecord::new(mobile, code, self.config.expire_seconds);
        let serialized = serde_json::to_string(&record)?;

        let key = VerificationRecord::cache_key(mobile);

        self.cache
            .set(&key, &serialized, Some(self.config.expire_seconds))
            .await?;

        // A record without its marker would allow an immediate resend
        if let Err(e) = self
            .cache
            .set(&marker.cache_key(), "1", Some(marker.ttl_seconds()))
            .await
        {
            if let Err(rollback) = self.cache.delete(&key).await {
                warn!(
                    phone = %mask_phone_number(mobile),
                    error = %rollback,
                    "Failed to roll back verification record"
                );
            }
            return Err(e);
        }
        Ok(())
    }
}

fn token_key(token: &str) -> String {
    format!("token_{}", token)
}

fn derive_token(mobile: &str, now: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(mobile.as_bytes());
    hasher.update(now.timestamp().to_string().as_bytes());
    hasher.update(Uuid::new_v4().as_bytes());
    hex::encode(hasher.finalize())
}
