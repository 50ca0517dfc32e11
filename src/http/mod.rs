//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign request ID)
//!     → routing::Router::dispatch (resolve, bind params, run handler)
//!     → response.rs (static responses for config-defined routes)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, RequestIdLayer, UuidRequestId, X_REQUEST_ID};
pub use response::StaticResponse;
pub use server::HttpServer;
