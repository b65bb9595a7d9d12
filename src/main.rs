use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infographic_catalog::{
    api,
    config::{Config, DATABASE_HOST},
    storage::{self, PgCatalog},
    upload_store::LocalStore,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match log_format.to_lowercase().as_str() {
        "gcp" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_stackdriver::layer())
                .init();
        }
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "infographic-catalog starting");

    let config = Config::load()?;

    // No retry: an unreachable database is fatal
    let pool = storage::create_pool(&config.database)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Database connection failed"))
        .with_context(|| {
            format!(
                "failed to connect to database '{}' on host '{}'",
                config.database.name, DATABASE_HOST
            )
        })?;
    info!(database = %config.database.name, "Database connected");

    let uploads = LocalStore::new(&config.uploads.dir)
        .with_context(|| format!("failed to prepare upload directory {}", config.uploads.dir))?;
    info!("Storing uploads in: {}", uploads.base_path().display());

    let state = Arc::new(AppState {
        catalog: Arc::new(PgCatalog::new(pool.clone())),
        uploads: Arc::new(uploads),
    });

    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    info!("Listening on: {}", config.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
