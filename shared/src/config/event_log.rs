//! External event-log service configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_string_or};

/// Endpoint settings for the downstream event-logging service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventLogConfig {
    /// Base URL of the service, e.g. `https://events.example.com`
    pub base_url: String,

    /// Timeout applied to each outbound request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3000"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EventLogConfig {
    /// Create a configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load event-log configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_string_or("EVENT_LOG_BASE_URL", &defaults.base_url),
            timeout_secs: env_or("EVENT_LOG_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    /// Full URL of the `qr-events` collection
    pub fn events_url(&self) -> String {
        format!("{}/qr-events", self.base_url.trim_end_matches('/'))
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url() {
        assert_eq!(
            EventLogConfig::new("http://logs.internal:9000/").events_url(),
            "http://logs.internal:9000/qr-events"
        );
        assert_eq!(
            EventLogConfig::new("http://logs.internal").events_url(),
            "http://logs.internal/qr-events"
        );
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(EventLogConfig::default().timeout_secs, 10);
    }
}
