//! # Papyr API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

#[cfg(feature = "scheduler")]
mod background;
mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        "Starting Papyr API Server on {}:{}",
        config.host,
        config.port
    );

    let db = papyr_infra::database::connect(&config.database)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            std::io::Error::other(e)
        })?;

    if config.auto_migrate {
        Migrator::up(&db, None).await.map_err(|e| {
            tracing::error!(error = %e, "Migration failed");
            std::io::Error::other(e)
        })?;
        tracing::info!("Migrations applied");
    }

    let state = AppState::new(db, config.site);

    #[cfg(feature = "scheduler")]
    let mut scheduler = background::start_background_jobs(
        background::SchedulerConfig::from_env(),
        state.tokens.clone(),
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to start scheduler");
        std::io::Error::other(e)
    })?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(middleware::error::json_error_handler))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    #[cfg(feature = "scheduler")]
    if let Err(e) = scheduler.shutdown().await {
        tracing::warn!(error = %e, "Scheduler did not stop cleanly");
    }

    server
}
