//! Segment router service.
//!
//! Serves a route table defined in TOML. Every route answers with a static
//! response whose body may echo bound path parameters.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server (timeout, request id, trace)  │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   routing::Router::dispatch                  │
//!                           │     method trie → literal / :param segments  │
//!                           │     bound params prepended to the query      │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!     Client Response       │   handler (or 404 not-found handler)         │
//!     ◀─────────────────────┼────────┘                                     │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use segment_router::config::{load_config, RouterConfig};
use segment_router::http::HttpServer;
use segment_router::lifecycle::{signals, Shutdown};
use segment_router::observability::init_logging;
use segment_router::routing::Router;

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Serve a path-trie route table over HTTP", long_about = None)]
struct Cli {
    /// Route table and server settings (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Validate the config, print the route table and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;
    tracing::info!("segment-router v{} starting", env!("CARGO_PKG_VERSION"));

    let router = Router::from_config(&config.routes)?;
    let routes = router.routes();

    if cli.check {
        for (method, pattern) in &routes {
            println!("{method:<6} {pattern}");
        }
        return Ok(());
    }

    if routes.is_empty() {
        tracing::warn!("Route table is empty; every request will get 404");
    }
    for (method, pattern) in &routes {
        tracing::info!(method = %method, pattern = %pattern, "Route registered");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::wait_for_signal(shutdown));

    HttpServer::new(config, router).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
