//! Provider-facing SMS trait

use async_trait::async_trait;

use crate::InfrastructureError;

/// Common interface for all SMS providers
///
/// Providers receive numbers already converted to E.164.
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send a text message, returning the provider's message id
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Human-readable provider name used in logs
    fn provider_name(&self) -> &str;

    /// Whether the provider can currently accept messages
    async fn is_available(&self) -> bool {
        true
    }
}
