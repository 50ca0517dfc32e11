//! Route trie nodes.
//!
//! One node per path segment. A node may exist only as an intermediate hop
//! for a deeper registration, in which case it has no handler of its own.

use std::collections::HashMap;
use std::fmt;

use crate::routing::handler::Handler;

/// A node in a per-method route trie.
#[derive(Default)]
pub struct RouteNode {
    handler: Option<Handler>,
    literals: HashMap<String, RouteNode>,
    param: Option<ParamChild>,
}

/// The single named-parameter child of a node.
pub struct ParamChild {
    pub name: String,
    pub node: Box<RouteNode>,
}

impl RouteNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    /// Sets the handler, returning the one it replaced.
    pub fn set_handler(&mut self, handler: Handler) -> Option<Handler> {
        self.handler.replace(handler)
    }

    pub fn literal(&self, token: &str) -> Option<&RouteNode> {
        self.literals.get(token)
    }

    pub fn param(&self) -> Option<&ParamChild> {
        self.param.as_ref()
    }

    /// Looks up or creates the literal child for `token`.
    pub fn literal_or_insert(&mut self, token: &str) -> &mut RouteNode {
        self.literals.entry(token.to_string()).or_default()
    }

    /// Looks up or creates the parameter child.
    ///
    /// Returns `Err` with the existing name when a parameter child with a
    /// different name is already present.
    pub fn param_or_insert(&mut self, name: &str) -> Result<&mut RouteNode, &str> {
        let child = self.param.get_or_insert_with(|| ParamChild {
            name: name.to_string(),
            node: Box::default(),
        });
        if child.name == name {
            Ok(child.node.as_mut())
        } else {
            Err(child.name.as_str())
        }
    }

    /// Collects the normalized patterns of every node below (and including)
    /// this one that carries a handler.
    pub fn collect_patterns(&self, prefix: &str, out: &mut Vec<String>) {
        if self.handler.is_some() {
            out.push(if prefix.is_empty() { "/".to_string() } else { format!("{prefix}/") });
        }
        for (token, child) in &self.literals {
            child.collect_patterns(&format!("{prefix}/{token}"), out);
        }
        if let Some(param) = &self.param {
            param.node.collect_patterns(&format!("{prefix}/:{}", param.name), out);
        }
    }
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("has_handler", &self.handler.is_some())
            .field("literals", &self.literals)
            .field("param", &self.param.as_ref().map(|p| (&p.name, &p.node)))
            .finish()
    }
}
