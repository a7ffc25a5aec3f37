//! HTTP server for the worklog engine.
//!
//! Reads `WORKLOG_CONFIG_DIR` (default `./config/standard`) and `WORKLOG_BIND`
//! (default `0.0.0.0:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worklog_engine::api::{AppState, create_router};
use worklog_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/standard";
const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("WORKLOG_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind = env::var("WORKLOG_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());

    let config = ConfigLoader::load(&config_dir)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, config_dir = %config_dir, "Worklog engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
