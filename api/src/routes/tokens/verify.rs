use actix_web::{web, HttpResponse};

use qp_core::errors::DomainError;
use qp_core::repositories::TokenStore;
use qp_core::services::issuance::{QrRendererTrait, SmsServiceTrait};
use qp_core::services::verification::EventLogTrait;

use super::AppState;
use crate::dto::{VerifyQuery, VerifyTokenResponse};
use crate::handlers::handle_domain_error;

/// Handler for GET /verify?token=...
///
/// Target of the link encoded in the QR code. A missing or empty token is
/// treated like an unknown one.
///
/// ## Errors
/// - 404 Not Found: unknown token
/// - 410 Gone: token expired
/// - 409 Conflict: token already used
/// - 503 Service Unavailable: event log unreachable, token still usable
/// - 502 Bad Gateway: event submission failed, token still usable
pub async fn verify_token<S, M, Q, E>(
    state: web::Data<AppState<S, M, Q, E>>,
    query: web::Query<VerifyQuery>,
) -> HttpResponse
where
    S: TokenStore + 'static,
    M: SmsServiceTrait + 'static,
    Q: QrRendererTrait + 'static,
    E: EventLogTrait + 'static,
{
    let token = match query.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => token,
        _ => return handle_domain_error(DomainError::NotFound),
    };

    match state.verification_service.verify(token).await {
        Ok(receipt) => HttpResponse::Ok().json(VerifyTokenResponse::from(receipt)),
        Err(error) => handle_domain_error(error),
    }
}
