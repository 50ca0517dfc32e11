//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / http / lifecycle
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (EnvFilter + fmt or JSON)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID recorded on every dispatch event
//! - Route registration logged at debug, startup at info

pub mod logging;

pub use logging::init_logging;
