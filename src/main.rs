//! Friends CRUD Service
//!
//! A tutorial-grade HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────┐
//!                     │               FRIENDS SERVICE               │
//!                     │                                             │
//!   Client Request    │  ┌─────────┐    ┌──────────┐    ┌────────┐ │
//!   ──────────────────┼─▶│  http   │───▶│ handlers │───▶│ friends│ │
//!                     │  │ server  │    │          │    │  store │ │
//!                     │  └─────────┘    └──────────┘    └────┬───┘ │
//!                     │                                      │     │
//!   Client Response   │  ┌──────────────────────────────┐    │     │
//!   ◀─────────────────┼──│  JSON body + status code      │◀──┘     │
//!                     │  └──────────────────────────────┘          │
//!                     │                                             │
//!                     │  ┌────────────────────────────────────────┐│
//!                     │  │        Cross-Cutting Concerns           ││
//!                     │  │  ┌─────────┐ ┌──────────┐ ┌──────────┐ ││
//!                     │  │  │ config  │ │ tracing  │ │request id│ ││
//!                     │  │  └─────────┘ └──────────┘ └──────────┘ ││
//!                     │  └────────────────────────────────────────┘│
//!                     └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use friends_api::config::{load_config, ServiceConfig};
use friends_api::http::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "friends-api", about = "In-memory friends CRUD service")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:3001).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "friends_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("friends-api v{} starting", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Load configuration; defaults apply when no file is given
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server over the seeded store
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
