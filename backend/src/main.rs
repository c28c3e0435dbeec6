//! Students API entry-point: loads settings, prepares storage, and serves
//! HTTP until a shutdown signal arrives.

use actix_web::web;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use students_api::inbound::http::health::HealthState;
use students_api::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use students_api::server::{ServerConfig, create_server};
use students_api::settings::AppSettings;

/// Open the pool and bring the schema up to date when a database is configured.
async fn connect_database(settings: &AppSettings) -> color_eyre::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        return Ok(None);
    };
    if settings.run_migrations {
        apply_migrations(url.to_owned())
            .await
            .wrap_err("failed to apply database migrations")?;
    }
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
        .await
        .wrap_err("failed to build database pool")?;
    Ok(Some(pool))
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable; listening for SIGINT only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("failed to load configuration")?;
    let bind_addr = settings.bind_addr()?;
    let pool = connect_database(&settings).await?;

    let mut config = ServerConfig::new(bind_addr).with_shutdown_grace(settings.shutdown_grace());
    if let Some(pool) = pool.clone() {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    let handle = server.handle();
    info!(%bind_addr, "students api listening");

    let drain_state = health_state.clone();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received; draining in-flight requests");
        drain_state.mark_unhealthy();
        handle.stop(true).await;
    });

    server.await.wrap_err("server terminated abnormally")?;

    if let Some(pool) = pool {
        let (connections, idle) = pool.connection_counts();
        info!(connections, idle, "releasing database pool");
        drop(pool);
    }
    info!("server stopped");
    Ok(())
}
