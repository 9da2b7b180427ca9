use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quini_core::{
    build_sources, load_config, validate_config, FallbackOrchestrator, HttpFetcher, PageFetcher,
    CONFIG_PATH_ENV,
};
use quini_server::{api::create_router, api::handlers::VERSION, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Explicit config path is optional; defaults and env vars cover the rest
    let config_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No {} set, using defaults and environment", CONFIG_PATH_ENV),
    }

    let config = load_config(config_path.as_deref()).context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!(
        "Upstream timeout: {}s, {} source(s)",
        config.scraper.timeout_secs,
        config.scraper.sources.len()
    );

    // Shared HTTP client for every source
    let fetcher: Arc<dyn PageFetcher> = Arc::new(
        HttpFetcher::new(&config.scraper).context("Failed to create HTTP client")?,
    );
    let sources = build_sources(&config.scraper, fetcher);
    for (i, source) in config.scraper.sources.iter().enumerate() {
        info!(
            "Source {}: {} ({}, {})",
            i + 1,
            source.name,
            source.strategy.kind(),
            source.url
        );
    }

    let orchestrator = Arc::new(FallbackOrchestrator::new(sources));
    info!("Fallback order: {}", orchestrator.source_names().join(" -> "));

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(orchestrator));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Quini 6 API v{} listening on http://{}", VERSION, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
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
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
