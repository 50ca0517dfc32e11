//! Path normalization and tokenizing.
//!
//! # Responsibilities
//! - Force a leading and trailing `/` on patterns and request paths
//! - Split a normalized path into segment tokens
//! - Classify pattern tokens as literal or named parameter
//!
//! # Design Decisions
//! - `/users`, `/users/` and `users` are the same path
//! - Only the two boundary slashes are dropped; `//` inside a path yields an
//!   empty segment token
//! - Matching is case-sensitive
//! - Request tokens are percent-decoded after splitting, so an encoded `/`
//!   stays inside its segment

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::routing::error::RouteError;

/// Prefix marking a named-parameter segment in a pattern.
pub const PARAM_PREFIX: char = ':';

/// Returns `path` with a leading and a trailing `/`.
pub fn normalize(path: &str) -> Result<String, RouteError> {
    if path.is_empty() {
        return Err(RouteError::InvalidPath);
    }

    let mut normalized = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

/// Splits a normalized path into its segment tokens.
///
/// The root path `/` has no segments.
pub fn segments(normalized: &str) -> Vec<&str> {
    if normalized.len() <= 1 {
        return Vec::new();
    }
    normalized[1..normalized.len() - 1].split('/').collect()
}

/// Percent-decodes one request segment. Tokens that do not decode to valid
/// UTF-8 are kept as they arrived.
pub fn decode_segment(token: &str) -> Cow<'_, str> {
    percent_decode_str(token)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(token))
}

/// A single token of a registration pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies one pattern token. A bare `:` has no name and is rejected.
    pub fn parse(token: &'a str, pattern: &str) -> Result<Self, RouteError> {
        match token.strip_prefix(PARAM_PREFIX) {
            Some("") => Err(RouteError::EmptyParameterName {
                pattern: pattern.to_string(),
            }),
            Some(name) => Ok(Segment::Param(name)),
            None => Ok(Segment::Literal(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_slashes() {
        assert_eq!(normalize("users").unwrap(), "/users/");
        assert_eq!(normalize("/users").unwrap(), "/users/");
        assert_eq!(normalize("users/").unwrap(), "/users/");
        assert_eq!(normalize("/users/").unwrap(), "/users/");
        assert_eq!(normalize("/").unwrap(), "/");
    }

    #[test]
    fn test_normalize_empty_is_invalid() {
        assert_eq!(normalize(""), Err(RouteError::InvalidPath));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for p in ["/", "a", "/a/b", "a/b/", "//", "/users/:id", "x//y"] {
            let once = normalize(p).unwrap();
            assert_eq!(normalize(&once).unwrap(), once, "input {p:?}");
        }
    }

    #[test]
    fn test_segments() {
        assert!(segments("/").is_empty());
        assert_eq!(segments("/users/"), vec!["users"]);
        assert_eq!(segments("/users/:id/posts/"), vec!["users", ":id", "posts"]);
    }

    #[test]
    fn test_segments_keep_inner_empty_tokens() {
        assert_eq!(segments("//"), vec![""]);
        assert_eq!(segments("/a//b/"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment("plain"), "plain");
        assert_eq!(decode_segment("John%20Doe"), "John Doe");
        assert_eq!(decode_segment("caf%C3%A9"), "café");
        assert_eq!(decode_segment("a%2Fb"), "a/b");
    }

    #[test]
    fn test_decode_segment_keeps_invalid_utf8() {
        assert_eq!(decode_segment("%FF%FE"), "%FF%FE");
        assert!(matches!(decode_segment("%FF"), Cow::Borrowed("%FF")));
    }

    #[test]
    fn test_segment_parse() {
        assert_eq!(Segment::parse("users", "/users").unwrap(), Segment::Literal("users"));
        assert_eq!(Segment::parse(":id", "/:id").unwrap(), Segment::Param("id"));
        assert_eq!(
            Segment::parse(":", "/users/:/"),
            Err(RouteError::EmptyParameterName {
                pattern: "/users/:/".into()
            })
        );
    }
}
