//! Unit tests for domain errors

use crate::errors::{DomainError, VerificationError};

#[test]
fn test_verification_error_messages() {
    assert_eq!(VerificationError::CooldownActive.to_string(), "sending too frequent");
    assert_eq!(VerificationError::AllProvidersFailed.to_string(), "sms sending failed");
}

#[test]
fn test_domain_error_wraps_verification_error() {
    let err: DomainError = VerificationError::ValidationExpired.into();
    assert!(matches!(
        err,
        DomainError::Verification(VerificationError::ValidationExpired)
    ));
    assert_eq!(err.to_string(), "verification code expired");
}

#[test]
fn test_config_error_conversion() {
    let config = sc_shared::SmscodeConfig {
        length: 0,
        ..Default::default()
    };
    let err: DomainError = config.validate().unwrap_err().into();
    match err {
        DomainError::Config { message } => assert!(message.contains("length")),
        other => panic!("Expected config error, got {:?}", other),
    }
}
