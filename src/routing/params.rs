//! Named-parameter bindings and query-string injection.

use url::form_urlencoded;

/// Path parameters bound while resolving a request, in path order.
///
/// Also inserted into the request extensions on dispatch so handlers can
/// read bindings without reparsing the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    bindings: Vec<(String, String)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.bindings.push((name.into(), value.into()));
    }

    /// First value bound under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Builds the outgoing raw query: bindings first, then the original
    /// query verbatim. Keys present in both keep both values.
    pub fn merge_query(&self, existing: Option<&str>) -> Option<String> {
        let existing = existing.filter(|q| !q.is_empty());
        if self.bindings.is_empty() {
            return existing.map(str::to_string);
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name, value);
        }
        let encoded = serializer.finish();

        Some(match existing {
            Some(query) => format!("{encoded}&{query}"),
            None => encoded,
        })
    }
}
