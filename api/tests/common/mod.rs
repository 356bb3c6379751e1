//! Shared fixtures for API tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use qp_api::AppState;
use qp_core::domain::value_objects::qr_event::QrEvent;
use qp_core::repositories::InMemoryTokenStore;
use qp_core::services::issuance::{
    IssuanceConfig, IssuanceService, QrRendererTrait, SmsServiceTrait,
};
use qp_core::services::verification::{EventLogTrait, VerificationService};

#[derive(Default)]
pub struct StubSms {
    pub fail: AtomicBool,
    pub sent: AtomicUsize,
}

#[async_trait]
impl SmsServiceTrait for StubSms {
    async fn send_message(&self, _phone: &str, _body: &str) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("gateway down".to_string());
        }
        let n = self.sent.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("SM{}", n))
    }
}

pub struct StubQr;

impl QrRendererTrait for StubQr {
    fn render(&self, content: &str) -> Result<String, String> {
        Ok(format!("data:image/svg+xml;base64,{}", content.len()))
    }
}

#[derive(Default)]
pub struct StubEventLog {
    pub fail_list: AtomicBool,
    pub fail_submit: AtomicBool,
    pub submitted: AtomicUsize,
}

#[async_trait]
impl EventLogTrait for StubEventLog {
    async fn list_events(&self) -> Result<usize, String> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err("connection refused".to_string());
        }
        Ok(self.submitted.load(Ordering::SeqCst))
    }

    async fn submit_event(&self, _event: &QrEvent) -> Result<(), String> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err("status 500".to_string());
        }
        self.submitted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub type TestState = AppState<InMemoryTokenStore, StubSms, StubQr, StubEventLog>;

/// Handles kept by a test to inspect or steer the collaborators
pub struct Fixture {
    pub state: web::Data<TestState>,
    pub store: Arc<InMemoryTokenStore>,
    pub sms: Arc<StubSms>,
    pub event_log: Arc<StubEventLog>,
}

pub fn fixture() -> Fixture {
    let store = Arc::new(InMemoryTokenStore::new());
    let sms = Arc::new(StubSms::default());
    let event_log = Arc::new(StubEventLog::default());

    let issuance_service = Arc::new(IssuanceService::new(
        IssuanceConfig {
            public_base_url: "https://gate.example.com".to_string(),
            purpose: "Visitor".to_string(),
            device_id: "gate-01".to_string(),
        },
        store.clone(),
        sms.clone(),
        Arc::new(StubQr),
    ));
    let verification_service = Arc::new(VerificationService::new(store.clone(), event_log.clone()));

    Fixture {
        state: web::Data::new(AppState {
            store: store.clone(),
            issuance_service,
            verification_service,
        }),
        store,
        sms,
        event_log,
    }
}
