//! Unit tests for the in-memory token store

use chrono::{Duration, Utc};

use crate::domain::entities::access_token::{TokenMutation, TokenRecord, TokenStatus};
use crate::errors::DomainError;
use crate::repositories::token_store::{InMemoryTokenStore, TokenStore};

fn record_valid_for(validity: Duration) -> TokenRecord {
    TokenRecord::issued_at(
        Utc::now(),
        "01012345678".to_string(),
        "Visitor".to_string(),
        "gate-01".to_string(),
        validity,
    )
}

#[tokio::test]
async fn test_put_and_get() {
    let store = InMemoryTokenStore::new();
    let record = record_valid_for(Duration::minutes(5));
    let token = record.token.clone();

    store.put(record.clone()).await.unwrap();

    assert_eq!(store.get(&token).await.unwrap(), Some(record));
    assert_eq!(store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_unknown_token() {
    let store = InMemoryTokenStore::new();
    assert!(store.get("no-such-token").await.unwrap().is_none());
    assert!(store.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_put_rejects_duplicate() {
    let store = InMemoryTokenStore::new();
    let record = record_valid_for(Duration::minutes(5));

    store.put(record.clone()).await.unwrap();
    let result = store.put(record).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_mark_consumes_pending_record() {
    let store = InMemoryTokenStore::new();
    let record = record_valid_for(Duration::minutes(5));
    let token = record.token.clone();
    store.put(record).await.unwrap();

    let updated = store.mark(&token, TokenMutation::Consume).await.unwrap().unwrap();
    assert_eq!(updated.status, TokenStatus::Verified);
    assert!(!updated.is_valid);

    let stored = store.get(&token).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_mark_never_reverts_terminal_state() {
    let store = InMemoryTokenStore::new();
    let record = record_valid_for(Duration::minutes(5));
    let token = record.token.clone();
    store.put(record).await.unwrap();

    store.mark(&token, TokenMutation::Expire).await.unwrap();
    let after = store.mark(&token, TokenMutation::Consume).await.unwrap().unwrap();

    assert_eq!(after.status, TokenStatus::Expired);
    assert!(!after.is_valid);
}

#[tokio::test]
async fn test_mark_unknown_token() {
    let store = InMemoryTokenStore::new();
    let result = store.mark("missing", TokenMutation::Consume).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_purge_expired_respects_cutoff() {
    let store = InMemoryTokenStore::new();
    let expired = record_valid_for(Duration::minutes(-10));
    let fresh = record_valid_for(Duration::minutes(10));
    let fresh_token = fresh.token.clone();

    store.put(expired).await.unwrap();
    store.put(fresh).await.unwrap();

    let purged = store.purge_expired(Utc::now()).await.unwrap();

    assert_eq!(purged, 1);
    assert_eq!(store.len().await.unwrap(), 1);
    assert!(store.get(&fresh_token).await.unwrap().is_some());
}

#[tokio::test]
async fn test_clones_share_storage() {
    let store = InMemoryTokenStore::new();
    let handle = store.clone();
    let record = record_valid_for(Duration::minutes(5));
    let token = record.token.clone();

    store.put(record).await.unwrap();

    assert!(handle.get(&token).await.unwrap().is_some());
}
