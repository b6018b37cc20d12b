//! # minimdmd — minimdm daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations and the DEP client
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router and serve it until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use anyhow::Context;
use minimdm_adapter_http_axum::router;
use minimdm_adapter_http_axum::state::AppState;
use minimdm_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteDeviceRepository, SqliteProfileRepository,
};
use minimdm_adapter_virtual::VirtualDepClient;
use minimdm_app::services::device_service::DeviceService;
use minimdm_app::services::profile_service::ProfileService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to initialise database")?;
    let pool = db.pool().clone();

    // Repositories
    let device_repo = SqliteDeviceRepository::new(pool.clone());
    let profile_repo = SqliteProfileRepository::new(pool);

    // Device enrollment program
    let dep_client = dep_client(&config)?;
    tracing::info!(
        devices = dep_client.devices().len(),
        "virtual DEP account ready"
    );

    // Services
    let device_service = DeviceService::new(dep_client, device_repo);
    let profile_service = ProfileService::new(profile_repo);

    // HTTP
    let state = AppState::new(device_service, profile_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "minimdmd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("minimdmd stopped");
    Ok(())
}

fn dep_client(config: &Config) -> anyhow::Result<VirtualDepClient> {
    let mut devices = if config.dep.virtual_enabled {
        VirtualDepClient::default().devices().to_vec()
    } else {
        Vec::new()
    };
    devices.extend(config.dep.seeded_devices()?);
    Ok(VirtualDepClient::with_devices(devices))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
