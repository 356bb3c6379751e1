//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use qp_core::repositories::TokenStore;
use qp_core::services::issuance::{QrRendererTrait, SmsServiceTrait};
use qp_core::services::verification::EventLogTrait;
use qp_shared::config::CorsConfig;

use crate::middleware::cors::create_cors;
use crate::routes::system::{api_documentation, health_check, json_config, not_found, query_config};
use crate::routes::tokens::{issue_token, verify_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, M, Q, E>(
    app_state: web::Data<AppState<S, M, Q, E>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: TokenStore + 'static,
    M: SmsServiceTrait + 'static,
    Q: QrRendererTrait + 'static,
    E: EventLogTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .app_data(query_config())
        // Request spans first, then CORS
        .wrap(create_cors(cors_config))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<S, M, Q, E>))
        // Link target encoded in the QR code
        .route("/verify", web::get().to(verify_token::<S, M, Q, E>))
        .service(
            web::scope("/api/v1")
                .route("/tokens", web::post().to(issue_token::<S, M, Q, E>))
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}
