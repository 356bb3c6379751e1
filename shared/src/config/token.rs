//! Access token issuance configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string_or};

/// Settings stamped onto every issued token, plus expired-token reclamation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Classification recorded on each token
    pub purpose: String,

    /// Access point the tokens are issued for
    pub device_id: String,

    /// Periodically drop expired tokens from the store
    #[serde(default)]
    pub reaper_enabled: bool,

    /// Seconds between reclamation cycles
    #[serde(default = "default_reaper_interval_secs")]
    pub reaper_interval_secs: u64,

    /// Seconds an expired token is kept before reclamation
    #[serde(default = "default_reaper_grace_secs")]
    pub reaper_grace_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            purpose: String::from("Visitor"),
            device_id: String::from("gate-01"),
            reaper_enabled: false,
            reaper_interval_secs: default_reaper_interval_secs(),
            reaper_grace_secs: default_reaper_grace_secs(),
        }
    }
}

impl TokenConfig {
    /// Load token configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            purpose: env_string_or("TOKEN_PURPOSE", &defaults.purpose),
            device_id: env_string_or("ACCESS_DEVICE_ID", &defaults.device_id),
            reaper_enabled: env_or("TOKEN_REAPER_ENABLED", defaults.reaper_enabled),
            reaper_interval_secs: env_or("TOKEN_REAPER_INTERVAL_SECS", defaults.reaper_interval_secs),
            reaper_grace_secs: env_or("TOKEN_REAPER_GRACE_SECS", defaults.reaper_grace_secs),
        }
    }
}

fn default_reaper_interval_secs() -> u64 {
    3600 // hourly
}

fn default_reaper_grace_secs() -> i64 {
    86_400 // one day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_from_env() {
        std::env::set_var("TOKEN_PURPOSE", "Contractor");
        std::env::set_var("ACCESS_DEVICE_ID", "lobby-east");
        std::env::set_var("TOKEN_REAPER_ENABLED", "true");

        let config = TokenConfig::from_env();
        assert_eq!(config.purpose, "Contractor");
        assert_eq!(config.device_id, "lobby-east");
        assert!(config.reaper_enabled);
        assert_eq!(config.reaper_interval_secs, 3600);

        std::env::remove_var("TOKEN_PURPOSE");
        std::env::remove_var("ACCESS_DEVICE_ID");
        std::env::remove_var("TOKEN_REAPER_ENABLED");
    }
}
