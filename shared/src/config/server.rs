//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, env_string_or, Environment};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Externally reachable base URL used to build verification links
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0, // Use all CPU cores
            public_base_url: default_public_base_url(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load server configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string_or("SERVER_HOST", &defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
            workers: env_or("SERVER_WORKERS", defaults.workers),
            public_base_url: env_string_or("PUBLIC_BASE_URL", &defaults.public_base_url),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public base URL without a trailing slash
    pub fn public_base_url(&self) -> &str {
        self.public_base_url.trim_end_matches('/')
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Explicitly allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Accept any origin (development convenience)
    #[serde(default = "default_allow_any_origin")]
    pub allow_any_origin: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            allow_any_origin: default_allow_any_origin(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Load CORS configuration from environment variables
    ///
    /// `CORS_ALLOWED_ORIGINS` is a comma-separated list. Outside production an
    /// empty list allows any origin; in production it means same-origin only.
    pub fn from_env(environment: Environment) -> Self {
        let allowed_origins: Vec<String> = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            allow_any_origin: allowed_origins.is_empty() && !environment.is_production(),
            allowed_origins,
            max_age: env_or("CORS_MAX_AGE", default_max_age()),
        }
    }
}

fn default_allow_any_origin() -> bool {
    true
}

fn default_public_base_url() -> String {
    String::from("http://localhost:8080")
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 0);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_public_base_url_trims_trailing_slash() {
        let config = ServerConfig {
            public_base_url: "https://gate.example.com/".to_string(),
            ..ServerConfig::new("localhost", 3000)
        };
        assert_eq!(config.public_base_url(), "https://gate.example.com");
        assert_eq!(config.bind_address(), "localhost:3000");
    }

    #[test]
    fn test_cors_default_allows_any_origin() {
        assert!(CorsConfig::default().allow_any_origin);
    }

    #[test]
    fn test_cors_production_without_origins_is_closed() {
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
        let config = CorsConfig::from_env(Environment::Production);
        assert!(!config.allow_any_origin);
        assert!(config.allowed_origins.is_empty());
    }
}
