//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `event_log` - External event-logging service endpoint
//! - `server` - HTTP server, public URL and CORS configuration
//! - `sms` - Outbound SMS provider credentials
//! - `token` - Access token issuance and reclamation settings
//!
//! Every sub-configuration implements `Default` and `from_env()`. Values are
//! read once at startup.

pub mod environment;
pub mod event_log;
pub mod server;
pub mod sms;
pub mod token;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use event_log::EventLogConfig;
pub use server::{CorsConfig, ServerConfig};
pub use sms::{SmsConfig, SmsProvider};
pub use token::TokenConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Token issuance configuration
    #[serde(default)]
    pub token: TokenConfig,

    /// External event-log configuration
    #[serde(default)]
    pub event_log: EventLogConfig,

    /// SMS provider configuration
    #[serde(default)]
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
            token: TokenConfig::default(),
            event_log: EventLogConfig::default(),
            sms: SmsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging,
            token: TokenConfig::from_env(),
            event_log: EventLogConfig::from_env(),
            sms: SmsConfig::from_env(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or unparsable.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a string environment variable, falling back to `default`.
pub(crate) fn env_string_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.token.purpose, "Visitor");
        assert!(!config.token.reaper_enabled);
        assert_eq!(config.sms.provider, SmsProvider::Mock);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("QP_TEST_ENV_OR_GARBAGE", "not-a-number");
        assert_eq!(env_or("QP_TEST_ENV_OR_GARBAGE", 42u64), 42);
        env::remove_var("QP_TEST_ENV_OR_GARBAGE");

        env::set_var("QP_TEST_ENV_OR_VALUE", " 17 ");
        assert_eq!(env_or("QP_TEST_ENV_OR_VALUE", 42u64), 17);
        env::remove_var("QP_TEST_ENV_OR_VALUE");
    }

    #[test]
    fn test_env_string_or_ignores_blank() {
        env::set_var("QP_TEST_ENV_STRING_BLANK", "   ");
        assert_eq!(env_string_or("QP_TEST_ENV_STRING_BLANK", "fallback"), "fallback");
        env::remove_var("QP_TEST_ENV_STRING_BLANK");
    }
}
