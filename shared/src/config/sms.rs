//! SMS provider configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::env_string_or;

/// Supported SMS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// Twilio REST API
    Twilio,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(SmsProvider::Mock),
            "twilio" => Ok(SmsProvider::Twilio),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Which provider delivers messages
    pub provider: SmsProvider,
    /// Provider account identifier (Twilio account SID)
    #[serde(default)]
    pub account_sid: String,
    /// Provider secret (Twilio auth token)
    #[serde(default)]
    pub auth_token: String,
    /// Sender phone number in E.164 format
    #[serde(default)]
    pub from_number: String,
    /// Country code prefixed to numbers that are not already E.164
    #[serde(default = "default_country_code")]
    pub default_country_code: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            default_country_code: default_country_code(),
        }
    }
}

impl SmsConfig {
    /// Load SMS configuration from environment variables
    pub fn from_env() -> Self {
        let provider = env::var("SMS_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();

        Self {
            provider,
            account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: env::var("TWILIO_FROM_NUMBER").unwrap_or_default(),
            default_country_code: env_string_or("SMS_DEFAULT_COUNTRY_CODE", &default_country_code()),
        }
    }
}

fn default_country_code() -> String {
    String::from("+1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("twilio".parse::<SmsProvider>().unwrap(), SmsProvider::Twilio);
        assert_eq!("MOCK".parse::<SmsProvider>().unwrap(), SmsProvider::Mock);
        assert!("carrier-pigeon".parse::<SmsProvider>().is_err());
    }

    #[test]
    fn test_default_is_mock() {
        let config = SmsConfig::default();
        assert_eq!(config.provider, SmsProvider::Mock);
        assert_eq!(config.default_country_code, "+1");
    }
}
