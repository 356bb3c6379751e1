//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Confirmation returned after a token was redeemed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReceipt {
    /// The redeemed token
    pub token: String,
    /// Access point the token was issued for
    pub device_id: String,
    /// Masked phone number of the holder
    pub phone: String,
    /// Classification of the visit
    pub purpose: String,
    /// When the redemption was requested
    pub verified_at: DateTime<Utc>,
}
