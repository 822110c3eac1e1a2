//! Session-backed verification store
//!
//! The record lives in the caller's session under a single key and carries its
//! own expiry timestamp. There is no cooldown in this variant.

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use sc_shared::phone::mask_phone_number;
use tracing::{error, info, warn};

use crate::domain::VerificationRecord;
use crate::errors::{DomainResult, VerificationError};

use super::config::VerificationServiceConfig;
use super::issuer::CodeIssuer;
use super::traits::{SessionStore, SmsTransport};
use super::types::SendResult;

/// Session key holding the serialized [`VerificationRecord`]
pub const SESSION_KEY: &str = "smscode";

/// Verification store persisting state in a request's [`SessionStore`]
///
/// One store serves many requests; each call receives the session of the
/// request being handled.
pub struct SessionVerificationStore<T: SmsTransport> {
    issuer: CodeIssuer<T>,
    config: VerificationServiceConfig,
}

impl<T: SmsTransport> SessionVerificationStore<T> {
    pub fn new(transport: Arc<T>, config: VerificationServiceConfig) -> Self {
        Self {
            issuer: CodeIssuer::new(transport, &config),
            config,
        }
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a code and remember it in `session`
    pub async fn create<S>(&self, session: &S, mobile: &str) -> SendResult
    where
        S: SessionStore + ?Sized,
    {
        let masked = mask_phone_number(mobile);

        let Some((code, _provider)) = self.issuer.issue(mobile).await else {
            error!(phone = %masked, event = "sms_all_failed", "No SMS provider delivered the code");
            return SendResult::failed(VerificationError::AllProvidersFailed);
        };

        let record = VerificationRecord::new(mobile, code.as_str(), self.config.expire_seconds);
        if let Err(e) = save(session, &record).await {
            error!(
                phone = %masked,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store verification code in session"
            );
            return SendResult::failed(VerificationError::Storage);
        }

        info!(phone = %masked, event = "otp_issued", "Verification code issued");
        SendResult::sent(code)
    }

    pub async fn validate<S>(&self, session: &S, mobile: &str, code: &str) -> bool
    where
        S: SessionStore + ?Sized,
    {
        self.check(session, mobile, code).await.is_ok()
    }

    /// Compare against the session record; a match clears it
    pub async fn check<S>(&self, session: &S, mobile: &str, code: &str) -> Result<(), VerificationError>
    where
        S: SessionStore + ?Sized,
    {
        let masked = mask_phone_number(mobile);

        let record = match session.get(SESSION_KEY).await {
            Ok(Some(stored)) => match serde_json::from_str::<VerificationRecord>(&stored) {
                Ok(record) => record,
                Err(e) => {
                    warn!(phone = %masked, error = %e, "Discarding unreadable session record");
                    return Err(VerificationError::ValidationMismatch);
                }
            },
            Ok(None) => return Err(VerificationError::ValidationMismatch),
            Err(e) => {
                error!(phone = %masked, error = %e, "Failed to read session record");
                return Err(VerificationError::ValidationMismatch);
            }
        };

        if record.mobile != mobile || !constant_time_eq(record.code.as_bytes(), code.as_bytes()) {
            info!(phone = %masked, event = "otp_verification_failed", "Verification code mismatch");
            return Err(VerificationError::ValidationMismatch);
        }

        if record.is_expired() {
            let _ = session.delete(SESSION_KEY).await;
            info!(phone = %masked, event = "otp_expired", "Verification code expired");
            return Err(VerificationError::ValidationExpired);
        }

        if let Err(e) = session.delete(SESSION_KEY).await {
            warn!(phone = %masked, error = %e, "Failed to clear session record");
        }

        info!(phone = %masked, event = "otp_verified_success", "Verification code verified");
        Ok(())
    }
}

async fn save<S>(session: &S, record: &VerificationRecord) -> DomainResult<()>
where
    S: SessionStore + ?Sized,
{
    let serialized = serde_json::to_string(record)?;
    session.set(SESSION_KEY, &serialized).await
}
