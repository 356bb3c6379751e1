//! Types used by the issuance service

use serde::{Deserialize, Serialize};

use crate::domain::entities::access_token::TokenRecord;

/// Raw issuance input as received from the operator
///
/// Both fields are optional here so that a missing value surfaces as
/// `BadRequest` from the service rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueTokenRequest {
    /// Phone number, digits and hyphens
    pub phone_number: Option<String>,
    /// Validity window in minutes
    pub duration_minutes: Option<i64>,
}

/// Result of a successful issuance
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// The stored record as issued
    pub record: TokenRecord,
    /// Link encoded into the QR image
    pub verification_url: String,
    /// QR image as a `data:` URL
    pub qr_image: String,
    /// Message id returned by the SMS provider
    pub message_id: String,
}
