//! Domain-specific error types and error handling.
//!
//! Every failure a caller can observe has its own variant so that the
//! presentation layer never has to collapse two causes into one status.

use thiserror::Error;

use crate::domain::entities::access_token::TokenStatus;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A required issuance input was missing or unusable
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// No record exists for the scanned token
    #[error("Token not found")]
    NotFound,

    /// The token was scanned after its validity window closed
    #[error("Token expired")]
    Expired,

    /// The token was already redeemed or found expired earlier
    #[error("Token already used (status: {status})")]
    AlreadyConsumed { status: TokenStatus },

    /// The event log could not be reached before committing the scan
    #[error("Event log unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// The QR image or SMS could not be produced or sent
    #[error("Token delivery failed: {message}")]
    DeliveryFailure { message: String },

    /// The event log rejected or failed to store the scan event
    #[error("Event submission failed: {message}")]
    SubmissionFailure { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::BadRequest { .. } => "bad_request",
            DomainError::NotFound => "token_not_found",
            DomainError::Expired => "token_expired",
            DomainError::AlreadyConsumed { .. } => "token_already_used",
            DomainError::UpstreamUnavailable { .. } => "event_log_unavailable",
            DomainError::DeliveryFailure { .. } => "delivery_failed",
            DomainError::SubmissionFailure { .. } => "event_submission_failed",
            DomainError::Internal { .. } => "internal_error",
        }
    }

    /// Whether the token is left untouched and a re-scan may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamUnavailable { .. } | DomainError::SubmissionFailure { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;
