//! Segment router: a per-method path trie with named parameters, served
//! over Axum.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{handler, Handler, Method, PathParams, RouteError, RouteMatch, Router};
