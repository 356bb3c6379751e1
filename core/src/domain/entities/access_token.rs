//! Access token entity issued for a single QR scan.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purpose recorded on tokens when none is configured
pub const DEFAULT_PURPOSE: &str = "Visitor";

/// Lifecycle state of an access token
///
/// `Pending` is the only non-terminal state. Transitions only ever move from
/// `Pending` to one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
    /// Issued and not yet redeemed
    Pending,
    /// Redeemed successfully
    Verified,
    /// Scanned after its validity window closed
    Expired,
}

impl TokenStatus {
    /// Whether no further transition is possible from this state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TokenStatus::Pending)
    }

    /// Stable string form used in logs and event payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStatus::Pending => "Pending",
            TokenStatus::Verified => "Verified",
            TokenStatus::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-place update applied to a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMutation {
    /// Expiry was detected on scan
    Expire,
    /// Verification was committed upstream
    Consume,
}

impl TokenMutation {
    /// Status a pending record moves to under this mutation
    pub fn target_status(&self) -> TokenStatus {
        match self {
            TokenMutation::Expire => TokenStatus::Expired,
            TokenMutation::Consume => TokenStatus::Verified,
        }
    }
}

/// One issued access token together with its verification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Opaque identifier (UUID v4), also the store key
    pub token: String,

    /// Phone number the token was delivered to, hyphens stripped
    pub phone_number: String,

    /// Classification of the visit, e.g. "Visitor"
    pub purpose: String,

    /// Access point the token is intended for
    pub device_id: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the token can no longer be redeemed
    pub expires_at: DateTime<Utc>,

    /// False once the token was redeemed or found expired; never flips back
    pub is_valid: bool,

    /// Current lifecycle state
    pub status: TokenStatus,
}

impl TokenRecord {
    /// Creates a pending record valid for `duration_minutes` from now
    ///
    /// # Arguments
    ///
    /// * `phone_number` - Normalized phone number
    /// * `purpose` - Classification stamped on the token
    /// * `device_id` - Intended access point
    /// * `duration_minutes` - Validity window
    pub fn new(
        phone_number: String,
        purpose: String,
        device_id: String,
        duration_minutes: i64,
    ) -> Self {
        Self::issued_at(
            Utc::now(),
            phone_number,
            purpose,
            device_id,
            Duration::milliseconds(duration_minutes * 60_000),
        )
    }

    /// Creates a pending record issued at `now` with an explicit validity window
    pub fn issued_at(
        now: DateTime<Utc>,
        phone_number: String,
        purpose: String,
        device_id: String,
        validity: Duration,
    ) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            phone_number,
            purpose,
            device_id,
            created_at: now,
            expires_at: now + validity,
            is_valid: true,
            status: TokenStatus::Pending,
        }
    }

    /// Whether the validity window has closed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the token can still be redeemed
    pub fn is_pending(&self) -> bool {
        self.is_valid && self.status == TokenStatus::Pending
    }

    /// Applies `mutation` if it is a forward transition.
    ///
    /// Returns `true` when the record changed. Terminal records are left
    /// untouched, which keeps both `is_valid` and `status` monotonic.
    pub fn apply(&mut self, mutation: TokenMutation) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.is_valid = false;
        self.status = mutation.target_status();
        true
    }
}
