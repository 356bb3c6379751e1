//! End-to-end token lifecycle through the public core API

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use qp_core::domain::value_objects::qr_event::QrEvent;
use qp_core::{
    DomainError, EventLogTrait, InMemoryTokenStore, IssuanceConfig, IssuanceService,
    IssueTokenRequest, QrRendererTrait, SmsServiceTrait, TokenRecord, TokenStatus, TokenStore,
    VerificationService,
};

struct NullSms;

#[async_trait]
impl SmsServiceTrait for NullSms {
    async fn send_message(&self, _phone: &str, _body: &str) -> Result<String, String> {
        Ok("msg-1".to_string())
    }
}

struct PlainQr;

impl QrRendererTrait for PlainQr {
    fn render(&self, content: &str) -> Result<String, String> {
        Ok(content.to_string())
    }
}

#[derive(Default)]
struct CountingEventLog {
    submitted: AtomicUsize,
}

#[async_trait]
impl EventLogTrait for CountingEventLog {
    async fn list_events(&self) -> Result<usize, String> {
        Ok(self.submitted.load(Ordering::SeqCst))
    }

    async fn submit_event(&self, _event: &QrEvent) -> Result<(), String> {
        self.submitted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn test_issue_then_verify_once() {
    let store = Arc::new(InMemoryTokenStore::new());
    let event_log = Arc::new(CountingEventLog::default());
    let issuance = IssuanceService::new(
        IssuanceConfig::default(),
        store.clone(),
        Arc::new(NullSms),
        Arc::new(PlainQr),
    );
    let verification = VerificationService::new(store.clone(), event_log.clone());

    let issued = issuance
        .issue(IssueTokenRequest {
            phone_number: Some("010-1234-5678".to_string()),
            duration_minutes: Some(1),
        })
        .await
        .unwrap();

    let receipt = verification.verify(&issued.record.token).await.unwrap();
    assert_eq!(receipt.token, issued.record.token);

    let again = verification.verify(&issued.record.token).await;
    assert!(matches!(
        again,
        Err(DomainError::AlreadyConsumed { status: TokenStatus::Verified })
    ));
    assert_eq!(event_log.submitted.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_expired_token_lifecycle() {
    let store = Arc::new(InMemoryTokenStore::new());
    let event_log = Arc::new(CountingEventLog::default());
    let verification = VerificationService::new(store.clone(), event_log.clone());

    let record = TokenRecord::issued_at(
        Utc::now() - Duration::minutes(10),
        "01012345678".to_string(),
        "Visitor".to_string(),
        "gate-01".to_string(),
        Duration::minutes(1),
    );
    let token = record.token.clone();
    store.put(record).await.unwrap();

    assert!(matches!(verification.verify(&token).await, Err(DomainError::Expired)));
    assert!(matches!(
        verification.verify(&token).await,
        Err(DomainError::AlreadyConsumed { status: TokenStatus::Expired })
    ));
    assert_eq!(event_log.submitted.load(Ordering::SeqCst), 0);
}
