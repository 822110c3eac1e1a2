//! Unit tests for verification record entity

use chrono::{Duration, Utc};
use crate::domain::entities::{CooldownMarker, VerificationRecord, COOLDOWN_SECONDS};

#[test]
fn test_new_record_expiry_window() {
    let record = VerificationRecord::new("13800000000", "123456", 900);

    assert_eq!(record.mobile, "13800000000");
    assert_eq!(record.code, "123456");
    assert_eq!(record.expires_at - record.issued_at, Duration::seconds(900));
    assert!(!record.is_expired());
    assert!(record.remaining_seconds() > 890);
}

#[test]
fn test_record_expired_after_lifetime() {
    let issued_at = Utc::now() - Duration::seconds(1000);
    let record = VerificationRecord::issued_at("13800000000", "123456", issued_at, 900);

    assert!(record.is_expired());
    assert_eq!(record.remaining_seconds(), 0);
    assert!(!record.is_expired_at(issued_at + Duration::seconds(900)));
    assert!(record.is_expired_at(issued_at + Duration::seconds(901)));
}

#[test]
fn test_huge_lifetime_does_not_overflow() {
    let record = VerificationRecord::new("13800000000", "123456", u64::MAX);
    assert!(!record.is_expired());
}

#[test]
fn test_record_serialization() {
    let record = VerificationRecord::new("13800000000", "042917", 60);
    let json = serde_json::to_string(&record).unwrap();
    let restored: VerificationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}

#[test]
fn test_cache_keys_are_distinct() {
    let marker = CooldownMarker::new("13800000000");
    assert_eq!(VerificationRecord::cache_key("13800000000"), "13800000000_code");
    assert_eq!(marker.cache_key(), "13800000000_sent");
    assert_eq!(marker.ttl_seconds(), COOLDOWN_SECONDS);
}
