//! Mock SMS provider for development
//!
//! Messages are written to the log with the recipient masked and never leave
//! the process.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

use qp_shared::utils::phone::{is_e164, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// SMS provider that only logs
#[derive(Debug, Default)]
pub struct MockSmsService {
    counter: AtomicUsize,
    simulate_failure: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail, for exercising delivery error paths
    pub fn set_simulate_failure(&mut self, fail: bool) {
        self.simulate_failure = fail;
    }

    /// Number of messages "sent" so far
    pub fn get_message_count(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_e164(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number: {}",
                mask_phone_number(phone_number)
            )));
        }

        if self.simulate_failure {
            return Err(InfrastructureError::Sms("Simulated SMS failure".to_string()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            to = %mask_phone_number(phone_number),
            length = message.len(),
            "[mock sms] {}",
            message
        );
        Ok(format!("mock_{}", n))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
