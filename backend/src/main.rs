//! Roster entry point: loads settings, prepares storage and serves HTTP.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::domain::ResourceUseCases;
use roster::inbound::http::health::HealthState;
use roster::inbound::http::state::HttpState;
use roster::outbound::persistence::{DbPool, DieselUnitOfWork, run_pending_migrations};
use roster::settings::ServerSettings;
use server::{ServerConfig, create_server, shutdown_on_signal};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let pool_config = settings
        .pool_config()
        .ok_or_else(|| eyre!("ROSTER_DATABASE_URL (or --database-url) must be set"))?;

    if settings.run_migrations() {
        run_pending_migrations(pool_config.database_url())
            .await
            .wrap_err("failed to apply migrations")?;
    }

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build connection pool")?;
    info!(connections = pool.connections(), "connection pool ready");

    let unit_of_work = Arc::new(DieselUnitOfWork::new(pool, settings.request_timeout()));
    let use_cases = Arc::new(ResourceUseCases::new(unit_of_work));
    let http_state = HttpState::new(use_cases.clone(), use_cases);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(settings.bind_addr(), http_state),
    )
    .wrap_err("failed to start HTTP server")?;

    actix_web::rt::spawn(shutdown_on_signal(health_state, server.handle()));
    server.await.wrap_err("HTTP server failed")?;
    info!("server stopped");
    Ok(())
}
