//! cdash-ui - Catalog data analysis dashboard
//!
//! Serves a single dashboard page over HTTP. The catalog CSV is read and
//! cleaned once; every interaction re-filters and re-aggregates the cached
//! copy.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cdash_common::config::{Overrides, TomlConfig};
use cdash_common::DatasetCache;
use cdash_ui::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for cdash-ui
#[derive(Parser, Debug)]
#[command(name = "cdash-ui")]
#[command(about = "Catalog data analysis dashboard")]
#[command(version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "CDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog CSV file
    #[arg(short, long, env = "CDASH_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CDASH_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = TomlConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .apply_overrides(Overrides {
            data_file: args.data_file,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        });

    let default_filter = format!(
        "cdash_ui={level},cdash_common={level},tower_http={level}",
        level = config.logging.level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before any file I/O
    info!(
        "Starting catalog dashboard (cdash-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Catalog file: {}", config.data_file.display());

    let cache = DatasetCache::new(config.data_file.clone());

    // Warm the cache; a missing file is reported on the page, not fatal here
    match cache.get_or_load() {
        Ok(dataset) => info!("✓ Catalog ready ({} titles)", dataset.len()),
        Err(e) if e.missing_file_name().is_some() => {
            warn!("{}; the dashboard will show an error until the file is present", e)
        }
        Err(e) => error!("Catalog could not be loaded: {}", e),
    }

    let app = build_router(AppState::new(cache));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("cdash-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
