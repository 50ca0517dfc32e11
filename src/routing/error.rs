//! Routing errors.
//!
//! Only registration can fail. Dispatch never surfaces these: a miss is
//! answered by the not-found handler.

use thiserror::Error;

/// Errors raised while building the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unsupported HTTP method: {0:?} (expected GET, POST, PUT, DELETE or HEAD)")]
    UnsupportedMethod(String),

    #[error("invalid path: pattern must not be empty")]
    InvalidPath,

    #[error("empty parameter name in pattern {pattern:?}")]
    EmptyParameterName { pattern: String },

    #[error("parameter :{found} in pattern {pattern:?} conflicts with existing :{existing} at the same position")]
    ConflictingParameter {
        pattern: String,
        existing: String,
        found: String,
    },
}
