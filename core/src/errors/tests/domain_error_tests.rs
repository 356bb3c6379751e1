//! Unit tests for domain errors

use std::collections::HashSet;

use crate::domain::entities::access_token::TokenStatus;
use crate::errors::DomainError;

fn all_kinds() -> Vec<DomainError> {
    vec![
        DomainError::BadRequest { message: "phone_number is required".to_string() },
        DomainError::NotFound,
        DomainError::Expired,
        DomainError::AlreadyConsumed { status: TokenStatus::Verified },
        DomainError::UpstreamUnavailable { message: "connection refused".to_string() },
        DomainError::DeliveryFailure { message: "sms rejected".to_string() },
        DomainError::SubmissionFailure { message: "500".to_string() },
        DomainError::Internal { message: "boom".to_string() },
    ]
}

#[test]
fn test_codes_are_distinct() {
    let kinds = all_kinds();
    let codes: HashSet<&str> = kinds.iter().map(|e| e.code()).collect();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn test_only_upstream_failures_are_retryable() {
    let retryable: Vec<&str> = all_kinds()
        .iter()
        .filter(|e| e.is_retryable())
        .map(|e| e.code())
        .collect();
    assert_eq!(retryable, vec!["event_log_unavailable", "event_submission_failed"]);
}

#[test]
fn test_already_consumed_reports_status() {
    let error = DomainError::AlreadyConsumed { status: TokenStatus::Expired };
    assert_eq!(error.to_string(), "Token already used (status: Expired)");
}
