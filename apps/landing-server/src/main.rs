//! # Landing Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use landing_server::middleware::CatchPanic;
use landing_server::telemetry::{TelemetryConfig, init_telemetry};
use landing_server::{AppConfig, AppState, configure_routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        brand = %config.site.brand,
        max_requests = config.signup.rate_limit.max_requests,
        window_secs = config.signup.rate_limit.window.as_secs(),
        "Starting landing server"
    );

    let state = AppState::new(&config).await?;

    HttpServer::new(move || {
        App::new()
            .wrap(CatchPanic)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
