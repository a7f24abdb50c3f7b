//! Backend entry-point: loads settings, prepares the database and serves the
//! REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use education_manager::inbound::http::health::HealthState;
use education_manager::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_async};
use education_manager::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let database_url = settings.database_url.clone().ok_or_else(|| {
        std::io::Error::other("EDUCATION_DATABASE_URL (or --database-url) must be set")
    })?;

    if settings.run_migrations {
        let applied = run_pending_migrations_async(database_url.clone())
            .await
            .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool unavailable: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(settings.bind_addr(), pool),
    )?;

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
