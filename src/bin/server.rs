//! Chartsight Signal Engine Server
//!
//! HTTP server exposing health, status, metrics, and the analyze endpoint.
//! The service is stateless and can be horizontally scaled; the engine holds
//! no cross-request state.

use chartsight::config;
use chartsight::core::http::start_server;
use chartsight::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::get_port();
    let env = config::get_environment();
    info!("Starting Chartsight Signal Engine");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
