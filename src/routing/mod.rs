//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     add_route(method, pattern, handler)
//!     → path.rs (normalize, split, classify segments)
//!     → node.rs (walk/extend the method's trie)
//!     → handler set on the terminal node
//!
//! Incoming Request (method, path, query)
//!     → router.rs (resolve: literal child first, then the parameter child)
//!     → params.rs (bound params prepended to the query)
//!     → matched handler, or the not-found handler
//! ```
//!
//! # Design Decisions
//! - One trie per method, fixed method set
//! - Literal segments take precedence over named parameters
//! - Immutable once shared; no runtime mutation API
//! - A miss always resolves to the not-found handler, never an error

pub mod error;
pub mod handler;
pub mod method;
pub mod node;
pub mod params;
pub mod path;
pub mod router;

pub use error::RouteError;
pub use handler::{handler, not_found, Handler};
pub use method::Method;
pub use params::PathParams;
pub use router::{RouteMatch, Router};
