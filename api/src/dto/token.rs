use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use qp_core::services::issuance::{IssueTokenRequest, IssuedToken};
use qp_core::services::verification::VerificationReceipt;

/// Body of `POST /api/v1/tokens`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTokenBody {
    /// Phone number, digits and hyphens
    /// Examples: "010-1234-5678", "4155552671"
    #[validate(
        required(message = "phone_number is required"),
        length(min = 1, max = 32, message = "phone_number must be 1 to 32 characters")
    )]
    pub phone_number: Option<String>,

    /// Validity window in minutes
    #[validate(
        required(message = "duration is required"),
        range(min = 1, max = 525600, message = "duration must be between 1 and 525600 minutes")
    )]
    pub duration: Option<i64>,
}

impl From<IssueTokenBody> for IssueTokenRequest {
    fn from(body: IssueTokenBody) -> Self {
        Self {
            phone_number: body.phone_number,
            duration_minutes: body.duration,
        }
    }
}

/// Response of a successful issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    pub token: String,
    pub phone_number: String,
    pub purpose: String,
    pub expires_at: DateTime<Utc>,
    pub verification_url: String,
    /// QR image as a `data:image/svg+xml;base64,...` URL
    pub qr_image: String,
    pub message_id: String,
}

impl From<IssuedToken> for IssueTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.record.token,
            phone_number: issued.record.phone_number,
            purpose: issued.record.purpose,
            expires_at: issued.record.expires_at,
            verification_url: issued.verification_url,
            qr_image: issued.qr_image,
            message_id: issued.message_id,
        }
    }
}

/// Query string of `GET /verify`
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    pub token: Option<String>,
}

/// Response of a successful scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    /// Always `"verified"`
    pub status: String,
    pub token: String,
    pub device_id: String,
    /// Masked phone number of the holder
    pub phone: String,
    pub purpose: String,
    pub verified_at: DateTime<Utc>,
}

impl From<VerificationReceipt> for VerifyTokenResponse {
    fn from(receipt: VerificationReceipt) -> Self {
        Self {
            status: "verified".to_string(),
            token: receipt.token,
            device_id: receipt.device_id,
            phone: receipt.phone,
            purpose: receipt.purpose,
            verified_at: receipt.verified_at,
        }
    }
}
