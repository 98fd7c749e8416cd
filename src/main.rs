//! Subscription aggregator server.
//!
//! # Environment Variables
//!
//! - `STORAGE_MODE`: `postgres` (default) | `in_memory`
//! - `DATABASE_URL`: `PostgreSQL` connection URL, or the parts `DB_HOST`,
//!   `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default: `10`)
//! - `APP_HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `SEED_DEMO_DATA`: Seed an empty store with demo data (default: `true`)
//! - `RUST_LOG`: Logging filter (default: `info,subscription_aggregator=debug`)

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subscription_aggregator::api::create_router;
use subscription_aggregator::infrastructure::{
    AppConfig, AppDependencies, ConfigError, InMemorySubscriptionStore, PostgresPoolConfig,
    PostgresSubscriptionStore, StorageMode, StoreError, SubscriptionStore, postgres,
    seed_if_empty,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,subscription_aggregator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting subscription aggregator");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            std::process::exit(1);
        }
    };

    tracing::info!(
        storage_mode = %config.storage_mode,
        address = %config.bind_address(),
        "Configuration loaded"
    );

    let store = match build_store(&config).await {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, "Failed to initialize storage");
            std::process::exit(1);
        }
    };

    if config.seed_demo_data {
        match seed_if_empty(store.as_ref()).await {
            Ok(0) => tracing::debug!("Store already populated, skipping demo data"),
            Ok(inserted) => tracing::info!(inserted, "Seeded demo subscriptions"),
            Err(error) => {
                tracing::error!(%error, "Failed to seed demo subscriptions");
                std::process::exit(1);
            }
        }
    }

    let dependencies = AppDependencies::new(config, store);
    let address = dependencies.config().bind_address();
    let application = create_router(dependencies).layer(TraceLayer::new_for_http());

    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, "Failed to bind to address {}", address);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", address);

    if let Err(error) = axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%error, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Server shutdown complete");
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn SubscriptionStore>, StartupError> {
    match config.storage_mode {
        StorageMode::InMemory => Ok(Arc::new(InMemorySubscriptionStore::new())),
        StorageMode::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            let pool_config = PostgresPoolConfig::with_url(url)
                .with_max_connections(config.database_max_connections);

            let pool = postgres::connect(&pool_config).await?;
            postgres::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PostgresSubscriptionStore::new(pool)))
        }
    }
}

/// Completes on Ctrl+C, or SIGTERM on Unix.
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
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
