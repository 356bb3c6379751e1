//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `qp_core`:
//!
//! - **Event log**: reqwest client for the external event-logging service
//! - **SMS**: Twilio and mock providers behind a common trait
//! - **QR**: SVG renderer producing `data:` URLs
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS provider (default)

/// Event-logging service client
pub mod event_log;

/// QR code rendering
pub mod qr;

/// SMS service module - External SMS providers
pub mod sms;

pub use event_log::HttpEventLogClient;
pub use qr::SvgQrRenderer;
pub use sms::{create_sms_service, SmsServiceAdapter};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status
    #[error("Upstream responded with status {status}")]
    UpstreamStatus { status: u16 },

    /// The remote service answered with a body we cannot read
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// QR encoding error
    #[error("QR encoding error: {0}")]
    Qr(String),
}
