use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal;

use crate::builder::Subscription;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::utils::browser::open_browser;
use crate::utils::error::{BananaError, BananaResult};

/// Serve `destination` over HTTP until Ctrl+C
///
/// A watch subscription, when given, is closed after the server stops.
pub async fn serve(
    server_config: &ServerConfig,
    destination: PathBuf,
    subscription: Option<Subscription>,
) -> BananaResult<()> {
    let address = server_config.address_string();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| BananaError::serve(&address, e))?;

    let result = run(listener, server_config, destination).await;

    if let Some(mut subscription) = subscription {
        // Joining the rebuild worker may wait for an in-flight build
        let closed = tokio::task::spawn_blocking(move || subscription.close()).await;
        if let Err(e) = closed {
            error!("Failed to stop watcher: {}", e);
        }
    }

    result.map_err(|e| BananaError::serve(address, e))
}

async fn run(listener: TcpListener, server_config: &ServerConfig, destination: PathBuf) -> std::io::Result<()> {
    info!("Serving {} at {}", destination.display(), server_config.url());
    info!("Press Ctrl+C to stop");

    if server_config.open_url {
        let url = server_config.url();
        info!("Opening browser at {}", url);
        open_browser(&url);
    }

    axum::serve(listener, create_app(destination))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutting down server (received Ctrl+C)..."),
        Err(e) => error!("Cannot listen for Ctrl+C: {}", e),
    }
}
