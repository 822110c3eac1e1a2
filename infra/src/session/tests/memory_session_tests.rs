//! Unit tests for the in-memory session

use sc_core::services::SessionStore;

use crate::session::MemorySession;

#[tokio::test]
async fn test_session_set_get_delete() {
    let session = MemorySession::new();

    session.set("smscode", "{}").await.unwrap();
    assert_eq!(session.get("smscode").await.unwrap().as_deref(), Some("{}"));

    session.delete("smscode").await.unwrap();
    assert_eq!(session.get("smscode").await.unwrap(), None);

    // deleting a missing key is not an error
    session.delete("smscode").await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let alice = MemorySession::new();
    let bob = MemorySession::new();
    assert_ne!(alice.id(), bob.id());

    alice.set("smscode", "a").await.unwrap();
    assert_eq!(bob.get("smscode").await.unwrap(), None);

    let same_visitor = alice.clone();
    assert_eq!(same_visitor.id(), alice.id());
    assert_eq!(same_visitor.get("smscode").await.unwrap().as_deref(), Some("a"));

    alice.clear().await;
    assert_eq!(same_visitor.get("smscode").await.unwrap(), None);
}
