//! Bridges infrastructure SMS providers to the core `SmsServiceTrait`

use async_trait::async_trait;

use qp_core::services::issuance::SmsServiceTrait;
use qp_shared::utils::phone::{mask_phone_number, to_e164};

use super::sms_service::SmsService;

/// Adapter that implements the core SmsServiceTrait for any provider
///
/// Numbers are converted to E.164 with the configured default country code
/// before they reach the provider.
pub struct SmsServiceAdapter {
    inner: Box<dyn SmsService>,
    default_country_code: String,
}

impl SmsServiceAdapter {
    pub fn new(inner: Box<dyn SmsService>, default_country_code: impl Into<String>) -> Self {
        Self {
            inner,
            default_country_code: default_country_code.into(),
        }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_message(&self, phone: &str, body: &str) -> Result<String, String> {
        let e164 = to_e164(phone, &self.default_country_code).ok_or_else(|| {
            format!(
                "Phone number {} cannot be converted to E.164",
                mask_phone_number(phone)
            )
        })?;

        self.inner
            .send_sms(&e164, body)
            .await
            .map_err(|e| e.to_string())
    }
}
