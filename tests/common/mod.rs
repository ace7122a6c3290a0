//! Shared utilities for integration tests.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use demo_web::config::AppConfig;
use demo_web::lifecycle::build_state;
use demo_web::{HttpServer, Shutdown};

/// Start the service on an ephemeral local port.
///
/// The returned `Shutdown` must be kept alive for the server to keep running.
pub async fn start_server(config: AppConfig) -> (SocketAddr, Shutdown) {
    let state = build_state(config).expect("state should build");
    let server = HttpServer::new(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
