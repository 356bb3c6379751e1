use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use qp_api::config::{init_tracing, load_config};
use qp_api::{create_app, AppState};
use qp_core::repositories::InMemoryTokenStore;
use qp_core::services::issuance::{IssuanceConfig, IssuanceService};
use qp_core::services::reaper::{ExpiredTokenReaper, ReaperConfig};
use qp_core::services::verification::VerificationService;
use qp_infra::{create_sms_service, HttpEventLogClient, SvgQrRenderer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting QrPass API Server");

    let store = Arc::new(InMemoryTokenStore::new());

    let event_log = HttpEventLogClient::new(&config.event_log)
        .context("failed to build event log client")?;
    info!(url = event_log.events_url(), "Event log configured");

    let issuance_service = Arc::new(IssuanceService::new(
        IssuanceConfig::from(&config),
        store.clone(),
        Arc::new(create_sms_service(&config.sms)),
        Arc::new(SvgQrRenderer::default()),
    ));
    let verification_service = Arc::new(VerificationService::new(
        store.clone(),
        Arc::new(event_log),
    ));

    Arc::new(ExpiredTokenReaper::new(
        store.clone(),
        ReaperConfig::from(&config.token),
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState {
        store,
        issuance_service,
        verification_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}
