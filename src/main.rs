use crate::booter::Booter;
use crate::config::AppConfig;
use crate::server::router::build_router;
use crate::server::types::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub mod booter;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        persist_uploads = config.persist_uploads,
        simulated_latency = ?config.simulated_latency,
        "starting plant detection service"
    );

    let state = Arc::new(AppState::from_config(&config).await?);
    let router = build_router(state, &config);

    Booter::new(config.port).await?.start(router).await
}
