//! Route registration and dispatch.
//!
//! # Responsibilities
//! - Own one route trie per supported method
//! - Insert handlers at arbitrary depths
//! - Resolve a request path with literal-before-parameter precedence
//! - Inject bound parameters into the request query and invoke the handler
//!
//! # Design Decisions
//! - Built with `&mut self` at startup, then shared as `Arc<Router>`:
//!   dispatch only ever needs `&self`
//! - A miss is an explicit `RouteMatch::NotFound`, never an error
//! - At most one parameter child per node, so resolution is deterministic

use axum::body::Body;
use axum::http::uri::{PathAndQuery, Uri};
use axum::http::Request;
use axum::response::Response;

use crate::config::RouteConfig;
use crate::http::response::StaticResponse;
use crate::routing::error::RouteError;
use crate::routing::handler::{not_found, Handler};
use crate::routing::method::Method;
use crate::routing::node::RouteNode;
use crate::routing::params::PathParams;
use crate::routing::path::{self, Segment};

/// Outcome of resolving a method and path against the route table.
pub enum RouteMatch<'r> {
    Found {
        handler: &'r Handler,
        params: PathParams,
    },
    /// No registered handler. Carries whatever was bound before the miss.
    NotFound { params: PathParams },
}

impl RouteMatch<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteMatch::Found { .. })
    }

    pub fn params(&self) -> &PathParams {
        match self {
            RouteMatch::Found { params, .. } | RouteMatch::NotFound { params } => params,
        }
    }
}

/// Per-method route tries plus the fallback handler.
pub struct Router {
    trees: [RouteNode; 5],
    not_found: Handler,
}

impl Router {
    pub fn new() -> Self {
        Self {
            trees: Default::default(),
            not_found: not_found(),
        }
    }

    /// Replaces the handler invoked when resolution fails.
    pub fn with_not_found(mut self, handler: Handler) -> Self {
        self.not_found = handler;
        self
    }

    /// Builds a router whose handlers are static responses from config.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteError> {
        let mut router = Self::new();
        for route in routes {
            let response = StaticResponse::new(route.status, route.body.clone());
            router.add_route(&route.method, &route.path, response.into_handler())?;
        }
        Ok(router)
    }

    /// Registers `handler` for `pattern` under a method given by name
    /// (case-insensitive).
    pub fn add_route(&mut self, method: &str, pattern: &str, handler: Handler) -> Result<(), RouteError> {
        let method = method.parse::<Method>()?;
        self.insert(method, pattern, handler)
    }

    /// Registers `handler` for `pattern`. Segments starting with `:` are
    /// named parameters. Registering the same pattern again replaces the
    /// handler.
    ///
    /// The pattern is fully validated before the trie is touched, so a
    /// rejected pattern leaves no nodes behind.
    pub fn insert(&mut self, method: Method, pattern: &str, handler: Handler) -> Result<(), RouteError> {
        let normalized = path::normalize(pattern)?;
        let segments = path::segments(&normalized)
            .into_iter()
            .map(|token| Segment::parse(token, &normalized))
            .collect::<Result<Vec<_>, _>>()?;
        self.check_param_names(method, &segments, &normalized)?;

        let mut node = &mut self.trees[method.index()];
        for segment in segments {
            node = match segment {
                Segment::Literal(literal) => node.literal_or_insert(literal),
                Segment::Param(name) => node.param_or_insert(name).map_err(|existing| {
                    RouteError::ConflictingParameter {
                        pattern: normalized.clone(),
                        existing: existing.to_string(),
                        found: name.to_string(),
                    }
                })?,
            };
        }

        if node.set_handler(handler).is_some() {
            tracing::debug!(method = %method, pattern = %normalized, "Replaced route handler");
        } else {
            tracing::debug!(method = %method, pattern = %normalized, "Registered route");
        }
        Ok(())
    }

    /// Walks the existing trie along `segments` and fails if a parameter
    /// segment would land where a differently named one already sits.
    fn check_param_names(&self, method: Method, segments: &[Segment<'_>], pattern: &str) -> Result<(), RouteError> {
        let mut node = &self.trees[method.index()];
        for segment in segments {
            node = match segment {
                Segment::Literal(literal) => match node.literal(literal) {
                    Some(child) => child,
                    None => return Ok(()),
                },
                Segment::Param(name) => match node.param() {
                    Some(param) if param.name != *name => {
                        return Err(RouteError::ConflictingParameter {
                            pattern: pattern.to_string(),
                            existing: param.name.clone(),
                            found: name.to_string(),
                        });
                    }
                    Some(param) => param.node.as_ref(),
                    None => return Ok(()),
                },
            };
        }
        Ok(())
    }

    /// Resolves `path` against the trie for `method`.
    ///
    /// Segments are percent-decoded before matching and binding. An empty
    /// path is the root path.
    pub fn resolve(&self, method: Method, path: &str) -> RouteMatch<'_> {
        let normalized = match path::normalize(path) {
            Ok(p) => p,
            Err(_) => "/".to_string(),
        };

        let mut params = PathParams::new();
        let mut node = &self.trees[method.index()];
        for raw in path::segments(&normalized) {
            let token = path::decode_segment(raw);
            if let Some(child) = node.literal(&token) {
                node = child;
            } else if let Some(param) = node.param() {
                params.push(param.name.as_str(), token);
                node = param.node.as_ref();
            } else {
                return RouteMatch::NotFound { params };
            }
        }

        match node.handler() {
            Some(handler) => RouteMatch::Found { handler, params },
            None => RouteMatch::NotFound { params },
        }
    }

    /// HTTP entry point: resolves the request, rewrites its query with any
    /// bound parameters and runs the matching handler (or the not-found
    /// handler).
    pub async fn dispatch(&self, mut request: Request<Body>) -> Response {
        let resolved = match Method::try_from(request.method()) {
            Ok(method) => self.resolve(method, request.uri().path()),
            Err(e) => {
                tracing::debug!(error = %e, "Request method has no route table");
                RouteMatch::NotFound { params: PathParams::new() }
            }
        };

        let (handler, params) = match resolved {
            RouteMatch::Found { handler, params } => (handler, params),
            RouteMatch::NotFound { params } => {
                tracing::debug!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "No route matched"
                );
                (&self.not_found, params)
            }
        };

        if !params.is_empty() {
            inject_query(&mut request, &params);
        }
        request.extensions_mut().insert(params);

        handler(request).await
    }

    /// Registered patterns, normalized and sorted.
    pub fn routes(&self) -> Vec<(Method, String)> {
        let mut routes = Vec::new();
        for method in Method::ALL {
            let mut patterns = Vec::new();
            self.trees[method.index()].collect_patterns("", &mut patterns);
            routes.extend(patterns.into_iter().map(|p| (method, p)));
        }
        routes.sort();
        routes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router").field("routes", &self.routes()).finish()
    }
}

/// Rewrites the request URI so its query starts with the bound parameters.
fn inject_query(request: &mut Request<Body>, params: &PathParams) {
    let uri = request.uri();
    let Some(query) = params.merge_query(uri.query()) else {
        return;
    };

    let mut parts = uri.clone().into_parts();
    let path_and_query = format!("{}?{}", uri.path(), query);
    match path_and_query.parse::<PathAndQuery>() {
        Ok(pq) => {
            parts.path_and_query = Some(pq);
            match Uri::from_parts(parts) {
                Ok(new_uri) => *request.uri_mut() = new_uri,
                Err(e) => tracing::warn!(error = %e, "Failed to rebuild URI with path params"),
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to encode path params into query"),
    }
}
