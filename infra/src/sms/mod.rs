//! SMS Service Module
//!
//! Delivers access pass links by SMS. Providers implement [`SmsService`];
//! [`SmsServiceAdapter`] exposes any of them to the core issuance service.

pub mod adapter;
pub mod mock_sms;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use adapter::SmsServiceAdapter;
pub use mock_sms::MockSmsService;
pub use sms_service::SmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

use qp_shared::config::{SmsConfig, SmsProvider};

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Falls back to the mock provider when the configured provider cannot be
/// initialized, so a misconfigured deployment still issues tokens and logs
/// the links.
pub fn create_sms_service(config: &SmsConfig) -> SmsServiceAdapter {
    let provider: Box<dyn SmsService> = match config.provider {
        SmsProvider::Mock => Box::new(MockSmsService::new()),
        SmsProvider::Twilio => twilio_or_mock(config),
    };

    tracing::info!(provider = provider.provider_name(), "SMS service ready");
    SmsServiceAdapter::new(provider, config.default_country_code.clone())
}

#[cfg(feature = "twilio-sms")]
fn twilio_or_mock(config: &SmsConfig) -> Box<dyn SmsService> {
    match TwilioConfig::try_from(config) {
        Ok(twilio_config) => Box::new(TwilioSmsService::new(twilio_config)),
        Err(e) => {
            tracing::error!("Failed to initialize Twilio SMS service: {}", e);
            tracing::warn!("Falling back to mock SMS service");
            Box::new(MockSmsService::new())
        }
    }
}

#[cfg(not(feature = "twilio-sms"))]
fn twilio_or_mock(_config: &SmsConfig) -> Box<dyn SmsService> {
    tracing::warn!("Twilio support not compiled in (feature `twilio-sms`), using mock SMS service");
    Box::new(MockSmsService::new())
}
