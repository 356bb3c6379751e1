//! Configuration for the issuance service

use qp_shared::config::AppConfig;

use crate::domain::entities::access_token::DEFAULT_PURPOSE;

/// Longest validity window accepted at issuance (one year)
pub const MAX_DURATION_MINUTES: i64 = 525_600;

/// Configuration for the issuance service
#[derive(Debug, Clone)]
pub struct IssuanceConfig {
    /// Externally reachable base URL, without a trailing slash
    pub public_base_url: String,
    /// Classification stamped on every token
    pub purpose: String,
    /// Access point the tokens are issued for
    pub device_id: String,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            public_base_url: String::from("http://localhost:8080"),
            purpose: DEFAULT_PURPOSE.to_string(),
            device_id: String::from("gate-01"),
        }
    }
}

impl From<&AppConfig> for IssuanceConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            public_base_url: config.server.public_base_url().to_string(),
            purpose: config.token.purpose.clone(),
            device_id: config.token.device_id.clone(),
        }
    }
}

impl IssuanceConfig {
    /// Link encoded into the QR image and sent by SMS
    pub fn verification_url(&self, token: &str) -> String {
        format!(
            "{}/verify?token={}",
            self.public_base_url.trim_end_matches('/'),
            token
        )
    }
}
