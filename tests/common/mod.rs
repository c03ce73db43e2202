//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use friends_api::{FriendStore, HttpServer, ServiceConfig};

/// Start a server over the built-in seed data on an ephemeral port.
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(FriendStore::seeded()).await
}

/// Start a server over an explicit store on an ephemeral port.
/// Each caller gets its own store instance, so tests stay isolated.
pub async fn spawn_server_with(store: FriendStore) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::with_store(ServiceConfig::default(), store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

#[allow(dead_code)]
pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
