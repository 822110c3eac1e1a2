//! Unit tests for the session-backed verification store

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::{ProviderConfig, VerificationRecord};
use crate::errors::VerificationError;
use crate::services::verification::traits::SessionStore;
use crate::services::verification::{
    SessionVerificationStore, VerificationServiceConfig, SESSION_KEY,
};

use super::mocks::{MockSession, MockTransport};

const MOBILE: &str = "13800000000";

fn store(transport: MockTransport) -> (SessionVerificationStore<MockTransport>, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let config = VerificationServiceConfig::default()
        .with_provider(ProviderConfig::new("aliyun").with_template("TPL_001"));
    (SessionVerificationStore::new(transport.clone(), config), transport)
}

#[tokio::test]
async fn test_create_stores_record_in_session() {
    let (store, transport) = store(MockTransport::new());
    let session = MockSession::new();

    let result = store.create(&session, MOBILE).await;
    assert!(result.is_success());
    assert_eq!(transport.delivered().len(), 1);

    let stored = session.get(SESSION_KEY).await.unwrap().unwrap();
    let record: VerificationRecord = serde_json::from_str(&stored).unwrap();
    assert_eq!(record.mobile, MOBILE);
    assert_eq!(record.code, result.code);
    assert_eq!(record.expires_at - record.issued_at, Duration::seconds(900));
}

#[tokio::test]
async fn test_validate_once() {
    let (store, _) = store(MockTransport::new());
    let session = MockSession::new();

    let code = store.create(&session, MOBILE).await.into_result().unwrap();
    assert!(store.validate(&session, MOBILE, &code).await);
    assert!(!store.validate(&session, MOBILE, &code).await);
    assert!(session.get(SESSION_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_no_cooldown_between_issuances() {
    let (store, transport) = store(MockTransport::new());
    let session = MockSession::new();

    assert!(store.create(&session, MOBILE).await.is_success());
    let second = store.create(&session, MOBILE).await.into_result().unwrap();
    assert_eq!(transport.delivered().len(), 2);
    assert!(store.validate(&session, MOBILE, &second).await);
}

#[tokio::test]
async fn test_record_bound_to_mobile() {
    let (store, _) = store(MockTransport::new());
    let session = MockSession::new();

    let code = store.create(&session, MOBILE).await.into_result().unwrap();
    assert_eq!(
        store.check(&session, "13900000000", &code).await,
        Err(VerificationError::ValidationMismatch)
    );
    assert!(store.validate(&session, MOBILE, &code).await);
}

#[tokio::test]
async fn test_expired_record_rejected_and_cleared() {
    let (store, _) = store(MockTransport::new());
    let session = MockSession::new();

    let issued_at = Utc::now() - Duration::seconds(1000);
    let record = VerificationRecord::issued_at(MOBILE, "123456", issued_at, 900);
    session
        .set(SESSION_KEY, &serde_json::to_string(&record).unwrap())
        .await
        .unwrap();

    assert_eq!(
        store.check(&session, MOBILE, "123456").await,
        Err(VerificationError::ValidationExpired)
    );
    assert!(session.get(SESSION_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_session_rejects() {
    let (store, _) = store(MockTransport::new());
    let session = MockSession::new();

    assert!(!store.validate(&session, MOBILE, "123456").await);
}

#[tokio::test]
async fn test_failed_send_leaves_session_untouched() {
    let (store, _) = store(MockTransport::failing(&["aliyun"]));
    let session = MockSession::new();

    let result = store.create(&session, MOBILE).await;
    assert_eq!(result.error(), Some(&VerificationError::AllProvidersFailed));
    assert!(session.values.lock().unwrap().is_empty());
}
