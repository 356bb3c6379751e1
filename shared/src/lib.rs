//! Shared utilities and common types for the QrPass server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes
//! - Phone number utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, EventLogConfig, LoggingConfig, ServerConfig, SmsConfig,
    TokenConfig,
};
pub use types::{ErrorResponse, HealthResponse, HealthStatus};
pub use utils::phone;
