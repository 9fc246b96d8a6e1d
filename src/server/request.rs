use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

/// Parsed HTTP request data handed to the router and injected into handlers
/// that ask for it.
///
/// The serving boundary builds one per request; tests and embedders can
/// build them directly. The path is stored normalized: query string split
/// off, leading and trailing separators stripped (the empty string is the
/// root).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    method: String,
    path: String,
    /// Header names are stored lower-cased.
    headers: HashMap<String, String>,
    query_params: HashMap<String, String>,
    body: Option<Value>,
}

impl HttpRequest {
    /// Build a request from a method and a request target. The query string
    /// is split off and decoded; the method is upper-cased.
    pub fn new(method: impl Into<String>, target: &str) -> Self {
        let method = method.into().to_ascii_uppercase();
        let query_params = parse_query_params(target);
        let path = target
            .split('?')
            .next()
            .unwrap_or("")
            .trim_matches('/')
            .to_string();
        debug!(method = %method, path = %path, param_count = query_params.len(), "request parsed");
        HttpRequest {
            method,
            path,
            headers: HashMap::new(),
            query_params,
            body: None,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Upper-cased HTTP method (GET, POST, ...).
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Normalized path: no query string, no leading or trailing separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Parsed JSON body, if one was attached.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

/// Parse query string parameters from a request target.
///
/// Extracts everything after the `?` character and URL-decodes parameter
/// names and values.
pub fn parse_query_params(target: &str) -> HashMap<String, String> {
    if let Some(pos) = target.find('?') {
        let query_str = &target[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}
