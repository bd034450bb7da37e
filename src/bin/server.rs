//! Trip expense HTTP server.
//!
//! Loads the rate and route configuration, builds the router around one
//! shared trip ledger, and serves it.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `TRIP_EXPENSE_CONFIG`: Configuration directory (default: ./config/default)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use trip_expense::api::{AppState, create_router};
use trip_expense::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting trip expense server");

    let config_dir =
        env::var("TRIP_EXPENSE_CONFIG").unwrap_or_else(|_| "./config/default".to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        routes = config.routes().len(),
        daily_rate = config.rates().daily_rate,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
