use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use warrantr::config::Config;
use warrantr::db::Db;
use warrantr::AppState;

#[derive(Parser, Debug)]
#[command(name = "warrantr")]
#[command(author, version, about = "A lightweight warranty registration backend", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "WARRANTR_CONFIG", default_value = "warrantr.toml")]
    config: PathBuf,

    /// Override log level
    #[arg(short, long, env = "WARRANTR_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)?;

    // Initialize logging
    let log_level = cli
        .log_level
        .as_ref()
        .unwrap_or(&config.logging.level)
        .clone();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Warrantr v{}", env!("CARGO_PKG_VERSION"));

    // The store is opened per request; startup only parses the connection
    // options. Schema is owned by the store side (see schema.sql).
    let db = Db::new(&config.store.url)?;
    tracing::info!("Store configured at {}", config.store.url);

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), db));
    let app = warrantr::api::create_router(state);

    // Start API server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
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
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
