use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use trade_store::api::router;
use trade_store::config::{command, ServerConfig};
use trade_store::logger::setup_logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    setup_logger();

    let config = ServerConfig::from_matches(&command().get_matches());
    let store = config.load_store()?;
    match &config.data {
        Some(path) => info!("Loaded {} trades from {}", store.len(), path.display()),
        None => info!("Loaded {} seed trades", store.len()),
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Trade server listening on http://{}", addr);

    axum::serve(listener, router(Arc::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Trade server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
