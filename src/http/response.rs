//! Static responses for routes defined in configuration.
//!
//! # Responsibilities
//! - Answer with a fixed status and body
//! - Fill `{name}` placeholders in the body from the request query
//!
//! # Design Decisions
//! - First query value wins, so a bound path parameter (prepended to the
//!   query on dispatch) shadows a same-named query parameter
//! - Unknown placeholders render as empty strings
//! - An unclosed `{` is copied through literally

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use url::form_urlencoded;

use crate::routing::handler::{handler, Handler};

/// A fixed response template.
#[derive(Debug, Clone)]
pub struct StaticResponse {
    status: StatusCode,
    body: String,
}

impl StaticResponse {
    /// Invalid status codes fall back to 500; config validation rejects
    /// them before a router is ever built from config.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Renders the body against a raw query string.
    pub fn render(&self, query: Option<&str>) -> String {
        let pairs: Vec<(String, String)> = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let mut out = String::with_capacity(self.body.len());
        let mut rest = self.body.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    if let Some((_, value)) = pairs.iter().find(|(k, _)| k == name) {
                        out.push_str(value);
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub fn into_handler(self) -> Handler {
        let template = Arc::new(self);
        handler(move |req: Request<Body>| {
            let template = template.clone();
            async move {
                let body = template.render(req.uri().query());
                (template.status, body).into_response()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_body() {
        let r = StaticResponse::new(200, "hello");
        assert_eq!(r.render(None), "hello");
        assert_eq!(r.render(Some("a=1")), "hello");
    }

    #[test]
    fn test_render_placeholders() {
        let r = StaticResponse::new(200, "user {id} sorted {sort}");
        assert_eq!(r.render(Some("id=42&sort=asc")), "user 42 sorted asc");
        assert_eq!(r.render(None), "user  sorted ");
    }

    #[test]
    fn test_render_first_value_wins() {
        let r = StaticResponse::new(200, "{id}");
        assert_eq!(r.render(Some("id=42&id=7")), "42");
    }

    #[test]
    fn test_render_decodes_values() {
        let r = StaticResponse::new(200, "[{q}]");
        assert_eq!(r.render(Some("q=a+b%26c")), "[a b&c]");
    }

    #[test]
    fn test_render_unclosed_brace() {
        let r = StaticResponse::new(200, "x {oops");
        assert_eq!(r.render(Some("oops=1")), "x {oops");
    }

    #[test]
    fn test_invalid_status_falls_back() {
        assert_eq!(StaticResponse::new(42, "").status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(StaticResponse::new(201, "").status(), StatusCode::CREATED);
    }
}
