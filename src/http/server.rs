//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all route handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Share the friend store with handlers via application state
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::friends::FriendStore;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;

/// Application state injected into handlers.
///
/// The store sits behind a single mutex so each handler's read-then-mutate
/// sequence (find-then-append, find-then-update) is atomic.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<FriendStore>>,
}

/// HTTP server for the friends service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server over the built-in seed data.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, FriendStore::seeded())
    }

    /// Create a server over an explicit store. Tests use this to get a
    /// fresh store per instance.
    pub fn with_store(config: ServiceConfig, store: FriendStore) -> Self {
        let state = AppState {
            store: Arc::new(Mutex::new(store)),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/",
                get(handlers::list_friends).post(handlers::create_friend),
            )
            .route("/filter", get(handlers::filter_friends))
            .route("/info", get(handlers::headers_info))
            .route(
                "/{id}",
                get(handlers::get_friend).put(handlers::update_friend),
            )
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
