use actix_web::{web, HttpResponse};
use validator::Validate;

use qp_core::repositories::TokenStore;
use qp_core::services::issuance::{QrRendererTrait, SmsServiceTrait};
use qp_core::services::verification::EventLogTrait;
use qp_shared::utils::phone::mask_phone_number;

use super::AppState;
use crate::dto::{IssueTokenBody, IssueTokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/tokens
///
/// Issues a single-use token and sends its verification link by SMS.
///
/// # Request Body
///
/// ```json
/// {
///     "phone_number": "010-1234-5678",
///     "duration": 30
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "token": "5d1f0c3e-8a4b-4c52-9f57-0e2f6b7d9a10",
///     "phone_number": "01012345678",
///     "purpose": "Visitor",
///     "expires_at": "2025-01-01T09:30:00Z",
///     "verification_url": "https://gate.example.com/verify?token=5d1f0c3e-...",
///     "qr_image": "data:image/svg+xml;base64,...",
///     "message_id": "SM..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing phone number or duration
/// - 500 Internal Server Error: QR rendering or SMS delivery failed
pub async fn issue_token<S, M, Q, E>(
    state: web::Data<AppState<S, M, Q, E>>,
    body: web::Json<IssueTokenBody>,
) -> HttpResponse
where
    S: TokenStore + 'static,
    M: SmsServiceTrait + 'static,
    Q: QrRendererTrait + 'static,
    E: EventLogTrait + 'static,
{
    let body = body.into_inner();

    if let Err(errors) = body.validate() {
        return handle_validation_errors(&errors);
    }

    tracing::info!(
        phone = %body.phone_number.as_deref().map(mask_phone_number).unwrap_or_default(),
        duration = ?body.duration,
        "Processing issue_token request"
    );

    match state.issuance_service.issue(body.into()).await {
        Ok(issued) => HttpResponse::Created().json(IssueTokenResponse::from(issued)),
        Err(error) => handle_domain_error(error),
    }
}
