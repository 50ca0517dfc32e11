//! Handler type stored in the route trie.

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;

/// Body written by the default not-found handler.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// A type-erased request handler. Cheap to clone.
pub type Handler = Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Wraps an async function into a [`Handler`].
pub fn handler<F, Fut, R>(f: F) -> Handler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    Arc::new(move |req: Request<Body>| f(req).map(IntoResponse::into_response).boxed())
}

/// The default handler for unmatched requests.
pub fn not_found() -> Handler {
    handler(|_req| async { (StatusCode::NOT_FOUND, NOT_FOUND_BODY) })
}
