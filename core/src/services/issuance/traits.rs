//! Traits for outbound delivery integrations

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a text message, returning the provider's message id
    async fn send_message(&self, phone: &str, body: &str) -> Result<String, String>;
}

/// Trait for QR image rendering
pub trait QrRendererTrait: Send + Sync {
    /// Encode `content` as a QR image and return it as a `data:` URL
    fn render(&self, content: &str) -> Result<String, String>;
}
