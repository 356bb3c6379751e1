//! CORS middleware configuration for cross-origin requests.
//!
//! The issuing console may be served from another origin than the API. Which
//! origins are accepted comes from `CorsConfig`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use qp_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// With `allow_any_origin` set every origin is accepted; otherwise only the
/// listed origins are. Entries that are not valid origins are skipped.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-device-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allow_any_origin {
        tracing::info!("CORS: allowing any origin");
        return cors.allow_any_origin();
    }

    for origin in &config.allowed_origins {
        if origin == "*" || header::HeaderValue::from_str(origin).is_err() {
            tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
            continue;
        }
        tracing::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
