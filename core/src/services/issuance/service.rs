//! Main issuance service implementation

use std::sync::Arc;

use qp_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::domain::entities::access_token::TokenRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TokenStore;

use super::config::{IssuanceConfig, MAX_DURATION_MINUTES};
use super::traits::{QrRendererTrait, SmsServiceTrait};
use super::types::{IssueTokenRequest, IssuedToken};

/// Issuance service creating access tokens and delivering them
pub struct IssuanceService<S, M, Q>
where
    S: TokenStore,
    M: SmsServiceTrait,
    Q: QrRendererTrait,
{
    /// Service configuration
    config: IssuanceConfig,
    /// Store shared with the verification service
    store: Arc<S>,
    /// SMS service for delivering the link
    sms_service: Arc<M>,
    /// Renderer producing the QR image
    qr_renderer: Arc<Q>,
}

impl<S, M, Q> IssuanceService<S, M, Q>
where
    S: TokenStore,
    M: SmsServiceTrait,
    Q: QrRendererTrait,
{
    /// Create a new issuance service
    pub fn new(
        config: IssuanceConfig,
        store: Arc<S>,
        sms_service: Arc<M>,
        qr_renderer: Arc<Q>,
    ) -> Self {
        Self {
            config,
            store,
            sms_service,
            qr_renderer,
        }
    }

    /// Issue a token and deliver it to the holder
    ///
    /// The record is stored before delivery is attempted. A QR or SMS failure
    /// yields `DeliveryFailure` and leaves the stored record in place.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Stored record plus delivery artifacts
    /// * `Err(DomainError::BadRequest)` - Missing or unusable input
    /// * `Err(DomainError::DeliveryFailure)` - QR rendering or SMS dispatch failed
    pub async fn issue(&self, request: IssueTokenRequest) -> DomainResult<IssuedToken> {
        let (phone_number, duration_minutes) = Self::validate(request)?;

        let record = TokenRecord::new(
            phone_number,
            self.config.purpose.clone(),
            self.config.device_id.clone(),
            duration_minutes,
        );
        self.store.put(record.clone()).await?;

        let masked = mask_phone_number(&record.phone_number);
        tracing::info!(
            token = %record.token,
            phone = %masked,
            expires_at = %record.expires_at,
            event = "token_issued",
            "Access token issued"
        );

        let verification_url = self.config.verification_url(&record.token);

        let qr_image = self.qr_renderer.render(&verification_url).map_err(|e| {
            tracing::error!(
                token = %record.token,
                error = %e,
                event = "qr_render_failed",
                "Failed to render QR code"
            );
            DomainError::DeliveryFailure { message: e }
        })?;

        let body = format!("Your access pass: {}", verification_url);
        let message_id = self
            .sms_service
            .send_message(&record.phone_number, &body)
            .await
            .map_err(|e| {
                tracing::error!(
                    token = %record.token,
                    phone = %masked,
                    error = %e,
                    event = "sms_send_failed",
                    "Failed to send access pass SMS"
                );
                DomainError::DeliveryFailure { message: e }
            })?;

        tracing::debug!(token = %record.token, message_id = %message_id, "Access pass delivered");

        Ok(IssuedToken {
            record,
            verification_url,
            qr_image,
            message_id,
        })
    }

    /// Check required inputs and normalize the phone number
    fn validate(request: IssueTokenRequest) -> DomainResult<(String, i64)> {
        let phone = request
            .phone_number
            .as_deref()
            .map(normalize_phone_number)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DomainError::BadRequest {
                message: "phone_number is required".to_string(),
            })?;

        let duration = request.duration_minutes.ok_or_else(|| DomainError::BadRequest {
            message: "duration is required".to_string(),
        })?;

        if !(1..=MAX_DURATION_MINUTES).contains(&duration) {
            return Err(DomainError::BadRequest {
                message: format!("duration must be between 1 and {} minutes", MAX_DURATION_MINUTES),
            });
        }

        Ok((phone, duration))
    }

    /// Access the service configuration
    pub fn config(&self) -> &IssuanceConfig {
        &self.config
    }
}
