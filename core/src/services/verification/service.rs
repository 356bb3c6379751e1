//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;

use qp_shared::utils::phone::mask_phone_number;

use crate::domain::entities::access_token::TokenMutation;
use crate::domain::value_objects::qr_event::QrEvent;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenStore;

use super::locks::TokenLocks;
use super::traits::EventLogTrait;
use super::types::VerificationReceipt;

/// Verification service redeeming scanned QR tokens
pub struct VerificationService<S: TokenStore, E: EventLogTrait> {
    /// Store owning the token records
    store: Arc<S>,
    /// External event log notified of each redemption
    event_log: Arc<E>,
    /// Serializes concurrent scans of the same token
    locks: TokenLocks,
}

impl<S: TokenStore, E: EventLogTrait> VerificationService<S, E> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `store` - Token store shared with the issuance service
    /// * `event_log` - Event log client
    pub fn new(store: Arc<S>, event_log: Arc<E>) -> Self {
        Self {
            store,
            event_log,
            locks: TokenLocks::new(),
        }
    }

    /// Redeem a scanned token
    ///
    /// The checks run in a fixed order while the token's lock is held:
    /// 1. Unknown token fails with `NotFound`
    /// 2. A pending token past its expiry is marked `Expired` and fails with `Expired`
    /// 3. An invalidated token fails with `AlreadyConsumed`
    /// 4. A token whose status is not `Pending` fails with `AlreadyConsumed`
    /// 5. The event log must answer a listing request, else `UpstreamUnavailable`
    /// 6. The scan event is submitted, else `SubmissionFailure`
    /// 7. Only then is the token marked `Verified`
    ///
    /// Failures in steps 5 and 6 leave the record untouched so the holder can
    /// scan again.
    ///
    /// # Arguments
    ///
    /// * `token` - The token value carried by the QR code
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationReceipt)` - The token was redeemed by this call
    /// * `Err(DomainError)` - One of the failures above
    pub async fn verify(&self, token: &str) -> DomainResult<VerificationReceipt> {
        let _guard = self.locks.acquire(token).await;
        let requested_at = Utc::now();

        let record = match self.store.get(token).await? {
            Some(record) => record,
            None => {
                tracing::warn!(event = "token_not_found", "Scan of unknown token");
                return Err(DomainError::NotFound);
            }
        };

        if record.is_valid && record.is_expired_at(requested_at) {
            self.store.mark(token, TokenMutation::Expire).await?;
            tracing::info!(
                token = token,
                phone = %mask_phone_number(&record.phone_number),
                expires_at = %record.expires_at,
                event = "token_expired",
                "Token scanned after its validity window"
            );
            return Err(DomainError::Expired);
        }

        if !record.is_pending() {
            if record.is_valid {
                tracing::warn!(
                    token = token,
                    status = %record.status,
                    event = "token_not_pending",
                    "Valid token is not pending"
                );
            } else {
                tracing::warn!(
                    token = token,
                    status = %record.status,
                    event = "token_reused",
                    "Scan of an already invalidated token"
                );
            }
            return Err(DomainError::AlreadyConsumed {
                status: record.status,
            });
        }

        // Reachability gate: the listing itself is not used for the payload
        let existing_events = self.event_log.list_events().await.map_err(|e| {
            tracing::error!(
                token = token,
                error = %e,
                event = "event_log_unreachable",
                "Event log pre-check failed, token left pending"
            );
            DomainError::UpstreamUnavailable { message: e }
        })?;
        tracing::debug!(existing_events, "Event log reachable");

        let event = QrEvent::from_record(&record, requested_at);
        self.event_log.submit_event(&event).await.map_err(|e| {
            tracing::error!(
                token = token,
                error = %e,
                event = "event_submission_failed",
                "Failed to record scan event, token left pending"
            );
            DomainError::SubmissionFailure { message: e }
        })?;

        let finalized = self
            .store
            .mark(token, TokenMutation::Consume)
            .await?
            .ok_or(DomainError::NotFound)?;

        tracing::info!(
            token = token,
            phone = %mask_phone_number(&finalized.phone_number),
            device_id = %finalized.device_id,
            event = "token_verified",
            "Token redeemed"
        );

        Ok(VerificationReceipt {
            token: finalized.token,
            device_id: finalized.device_id,
            phone: mask_phone_number(&finalized.phone_number),
            purpose: finalized.purpose,
            verified_at: requested_at,
        })
    }

    /// Number of tokens currently being verified or waited on
    pub fn in_flight(&self) -> usize {
        self.locks.active()
    }
}
