//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Install the route table as the Axum fallback service
//! - Wire up middleware (timeout, request ID, tracing)
//! - Bind server to listener
//! - Stop on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RouterConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::routing::Router;

/// HTTP server in front of a route table.
pub struct HttpServer {
    app: axum::Router,
    config: RouterConfig,
    routes: Arc<Router>,
}

impl HttpServer {
    /// Takes ownership of the route table. From here on it is read-only.
    pub fn new(config: RouterConfig, routes: Router) -> Self {
        let routes = Arc::new(routes);
        let app = Self::build_app(&config, routes.clone());
        Self { app, config, routes }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &RouterConfig, routes: Arc<Router>) -> axum::Router {
        axum::Router::new()
            .fallback(dispatch_handler)
            .with_state(routes)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(RequestIdLayer)
    }

    /// The Axum app, for serving in-process (e.g. with `tower::ServiceExt::oneshot`).
    pub fn app(&self) -> axum::Router {
        self.app.clone()
    }

    pub fn routes(&self) -> &Router {
        &self.routes
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.routes().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback handler: every request goes through the route table.
async fn dispatch_handler(State(routes): State<Arc<Router>>, request: Request<Body>) -> Response {
    tracing::debug!(
        request_id = request.request_id().unwrap_or("unknown"),
        method = %request.method(),
        uri = %request.uri(),
        "Dispatching request"
    );
    routes.dispatch(request).await
}
