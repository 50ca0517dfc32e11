//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use segment_router::config::{RouteConfig, RouterConfig};
use segment_router::http::HttpServer;
use segment_router::lifecycle::Shutdown;
use segment_router::routing::Router;
use tokio::net::TcpListener;

/// A config-defined route.
pub fn route(method: &str, path: &str, status: u16, body: &str) -> RouteConfig {
    RouteConfig {
        method: method.into(),
        path: path.into(),
        status,
        body: body.into(),
    }
}

/// Builds a server from config-defined routes.
pub fn server(routes: Vec<RouteConfig>) -> HttpServer {
    let mut config = RouterConfig::default();
    config.routes = routes;
    let router = Router::from_config(&config.routes).expect("valid route table");
    HttpServer::new(config, router)
}

/// Start `server` on an ephemeral port. Returns its address.
#[allow(dead_code)]
pub async fn spawn_server(server: HttpServer, shutdown: &Shutdown) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

/// HTTP client that never reuses connections or goes through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
