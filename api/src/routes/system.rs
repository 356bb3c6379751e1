//! Service-level endpoints: health, endpoint listing and the 404 fallback

use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::Utc;

use qp_core::repositories::TokenStore;
use qp_core::services::issuance::{QrRendererTrait, SmsServiceTrait};
use qp_core::services::verification::EventLogTrait;
use qp_shared::types::{HealthResponse, HealthStatus};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::routes::tokens::AppState;

/// Health check endpoint handler
pub async fn health_check<S, M, Q, E>(state: web::Data<AppState<S, M, Q, E>>) -> HttpResponse
where
    S: TokenStore + 'static,
    M: SmsServiceTrait + 'static,
    Q: QrRendererTrait + 'static,
    E: EventLogTrait + 'static,
{
    let (status, stored_tokens) = match state.store.len().await {
        Ok(count) => (HealthStatus::Healthy, count),
        Err(e) => {
            tracing::error!("Token store health check failed: {}", e);
            (HealthStatus::Unhealthy, 0)
        }
    };

    let body = HealthResponse {
        status,
        service: "qrpass-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stored_tokens,
        timestamp: Utc::now(),
    };

    match status {
        HealthStatus::Healthy => HttpResponse::Ok().json(body),
        _ => HttpResponse::ServiceUnavailable().json(body),
    }
}

/// API documentation endpoint
pub async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "QrPass API v1",
        "endpoints": {
            "health": "/health",
            "tokens": {
                "issue": {
                    "path": "/api/v1/tokens",
                    "method": "POST",
                    "description": "Issue a single-use QR token and send it by SMS",
                    "request_body": {
                        "phone_number": "string (digits and hyphens)",
                        "duration": "integer minutes (1-525600)"
                    },
                    "responses": {
                        "201": "Token issued and delivered",
                        "400": "Missing or invalid input",
                        "500": "QR rendering or SMS delivery failed"
                    }
                },
                "verify": {
                    "path": "/verify?token={token}",
                    "method": "GET",
                    "description": "Redeem a scanned token",
                    "responses": {
                        "200": "Token verified",
                        "404": "Unknown token",
                        "409": "Token already used",
                        "410": "Token expired",
                        "502": "Scan event could not be recorded, retry",
                        "503": "Event log unavailable, retry"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}

/// Invalid JSON bodies are reported in the common error shape
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::warn!("Rejected request body: {}", message);
        let response = ErrorResponse::new("bad_request", message).to_response(StatusCode::BAD_REQUEST);
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Malformed query strings are reported in the common error shape
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response =
            ErrorResponse::new("bad_request", err.to_string()).to_response(StatusCode::BAD_REQUEST);
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
