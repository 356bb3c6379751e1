//! Conversion of failures into HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use qp_core::errors::DomainError;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Status code a domain error is reported with
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Expired => StatusCode::GONE,
        DomainError::AlreadyConsumed { .. } => StatusCode::CONFLICT,
        DomainError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::SubmissionFailure { .. } => StatusCode::BAD_GATEWAY,
        DomainError::DeliveryFailure { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Delivery and internal failures are reported generically; their cause is
/// only logged.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    let response = match &error {
        DomainError::BadRequest { message } => ErrorResponse::new(error.code(), message.clone()),
        DomainError::NotFound => {
            ErrorResponse::new(error.code(), "The scanned token does not exist")
        }
        DomainError::Expired => ErrorResponse::new(error.code(), "The scanned token has expired"),
        DomainError::AlreadyConsumed { status } => {
            ErrorResponse::new(error.code(), "The scanned token has already been used")
                .add_detail("status", status.as_str())
        }
        DomainError::UpstreamUnavailable { .. } => ErrorResponse::new(
            error.code(),
            "The event log is unavailable. Please scan again shortly",
        ),
        DomainError::SubmissionFailure { .. } => ErrorResponse::new(
            error.code(),
            "The scan could not be recorded. Please scan again",
        ),
        DomainError::DeliveryFailure { .. } | DomainError::Internal { .. } => {
            ErrorResponse::new("internal_error", "An internal error occurred")
        }
    };

    if status.is_server_error() {
        tracing::error!(code = error.code(), "Domain Error: {}", error);
    } else {
        tracing::warn!(code = error.code(), "Domain Error: {}", error);
    }

    response.to_response(status)
}

/// Report request validation failures field by field
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new("bad_request", "Invalid request data");

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }

    tracing::warn!(details = ?response.details, "Request validation failed");
    response.to_response(StatusCode::BAD_REQUEST)
}
