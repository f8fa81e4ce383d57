use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use setlist_manager::{
    config::{Config, LogFormat},
    create_router,
    db::Store,
    handlers,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "setlist_manager=debug,tower_http=debug,axum=trace".into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Starting Setlist Manager...");
    tracing::info!("Configuration loaded");

    // Open the document store
    let store = match &config.storage_path {
        Some(path) => Store::open(path).await,
        None => {
            tracing::warn!("STORAGE_PATH is :memory:, data will not survive a restart");
            Store::in_memory()
        }
    };

    // Initialize application state
    let state = AppState::new(store.clone(), config.clone());

    if config.seed_on_empty && state.repository.all().await.is_empty() {
        handlers::backup::seed_example_data(&state).await?;
    }

    // Build application routes
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
