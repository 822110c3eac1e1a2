//! Issuance cooldown marker

/// Seconds a mobile must wait between two issuances
pub const COOLDOWN_SECONDS: u64 = 60;

/// Short-lived flag blocking re-issuance to a mobile
///
/// Stored next to the verification record but with its own fixed TTL. It is not
/// cleared by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownMarker {
    pub mobile: String,
}

impl CooldownMarker {
    pub fn new(mobile: impl Into<String>) -> Self {
        Self {
            mobile: mobile.into(),
        }
    }

    pub fn cache_key(&self) -> String {
        format!("{}_sent", self.mobile)
    }

    pub fn ttl_seconds(&self) -> u64 {
        COOLDOWN_SECONDS
    }
}
