//! Scan event reported to the external event log.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::access_token::TokenRecord;

/// Payload submitted to `POST /qr-events`
///
/// ```json
/// {
///     "client": { "device_id": "gate-01" },
///     "data": {
///         "phone": "01012345678",
///         "purpose": "Visitor",
///         "requested_at": "2025-01-01T09:00:00.000Z",
///         "status": "Pending"
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrEvent {
    /// Access point that scanned the token
    pub client: QrEventClient,
    /// Details of the scan
    pub data: QrEventData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrEventClient {
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrEventData {
    pub phone: String,
    pub purpose: String,
    /// RFC 3339 timestamp of the scan request
    pub requested_at: String,
    /// Token status observed when the scan was requested
    pub status: String,
}

impl QrEvent {
    /// Builds the event for a scan of `record` requested at `requested_at`
    pub fn from_record(record: &TokenRecord, requested_at: DateTime<Utc>) -> Self {
        Self {
            client: QrEventClient {
                device_id: record.device_id.clone(),
            },
            data: QrEventData {
                phone: record.phone_number.clone(),
                purpose: record.purpose.clone(),
                requested_at: requested_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                status: record.status.as_str().to_string(),
            },
        }
    }
}
