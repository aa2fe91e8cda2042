//! Term deposit REST service.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection URL (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: `5`)
//! - `USER_DIRECTORY_BASE_URL`: user directory base URL (default: `http://127.0.0.2:8080/api`)
//! - `USER_DIRECTORY_TIMEOUT_MS`: per-request directory timeout (default: `5000`)
//! - `RUST_LOG`: logging filter (default: `deposit_core_server=debug,tower_http=debug`)
//! - `HOST`: server host address (default: `0.0.0.0`)
//! - `PORT`: server port (default: `8080`)

use std::sync::Arc;

use anyhow::Context;
use deposit_core_postgres::repository::db_init::init_database;
use deposit_core_postgres::PostgresRepositories;
use deposit_core_server::{router, AppConfig, AppState, HttpUserDirectory, SystemClock};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deposit_core_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            return Err(error.into());
        }
    };
    let address = config.socket_addr()?;

    tracing::info!(
        max_connections = config.database_max_connections,
        user_directory = %config.user_directory_base_url,
        user_directory_timeout_ms = config.user_directory_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    init_database(&pool)
        .await
        .context("failed to initialize the database schema")?;
    tracing::info!("Database schema ready");

    let repositories = PostgresRepositories::new(Arc::new(pool)).create_all_repositories();
    let users = HttpUserDirectory::new(
        config.user_directory_base_url.clone(),
        config.user_directory_timeout,
    );

    let state = AppState::new(
        repositories.rate_type_repository,
        repositories.deposit_account_repository,
        Arc::new(users),
        Arc::new(SystemClock),
    );

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind to {address}"))?;

    match listener.local_addr() {
        Ok(address) => tracing::info!("Listening on {}", address),
        Err(error) => tracing::warn!(%error, "Could not determine local address"),
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
