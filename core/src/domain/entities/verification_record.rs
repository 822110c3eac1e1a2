//! Verification record entity

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default lifetime of an issued code in seconds (15 minutes)
pub const DEFAULT_EXPIRE_SECONDS: u64 = 900;

/// Default number of digits in a code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// A code issued to a mobile number and awaiting validation
///
/// At most one live record exists per mobile; re-issuance overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Mobile number the code was sent to
    pub mobile: String,

    /// The issued code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Create a record issued now that lives for `expire_seconds`
    pub fn new(mobile: impl Into<String>, code: impl Into<String>, expire_seconds: u64) -> Self {
        Self::issued_at(mobile, code, Utc::now(), expire_seconds)
    }

    /// Create a record with an explicit issue time
    pub fn issued_at(
        mobile: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        expire_seconds: u64,
    ) -> Self {
        let lifetime = i64::try_from(expire_seconds).unwrap_or(i64::MAX / 1000);
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|d| issued_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            mobile: mobile.into(),
            code: code.into(),
            issued_at,
            expires_at,
        }
    }

    /// Cache key holding the record for a mobile
    pub fn cache_key(mobile: &str) -> String {
        format!("{}_code", mobile)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Seconds until expiry, zero once expired
    pub fn remaining_seconds(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}
