use http::StatusCode;
use serde_json::Value;

use crate::dispatcher::{Dispatch, DispatchError};

/// Fixed body written for requests that match no route.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Minimal HTTP response for the serving boundary to write out.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode) -> Self {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Render a dispatch outcome.
    ///
    /// String payloads are written verbatim as `text/plain`; any other
    /// value is serialized as JSON. A miss becomes a 404 with the fixed
    /// [`NOT_FOUND_BODY`].
    pub fn from_dispatch(outcome: Dispatch) -> HttpResponse {
        match outcome {
            Dispatch::Handled(Value::String(s)) => HttpResponse::new(StatusCode::OK)
                .with_header("Content-Type", "text/plain")
                .with_body(s.into_bytes()),
            Dispatch::Handled(other) => HttpResponse::new(StatusCode::OK)
                .with_header("Content-Type", "application/json")
                .with_body(other.to_string().into_bytes()),
            Dispatch::NotFound => HttpResponse::new(StatusCode::NOT_FOUND)
                .with_header("Content-Type", "text/plain")
                .with_body(NOT_FOUND_BODY.as_bytes().to_vec()),
        }
    }

    /// Render a dispatch failure.
    ///
    /// A resolution error means the route matched but the target could not
    /// be run, so the status is 500, never 404.
    pub fn from_error(err: &DispatchError) -> HttpResponse {
        let body = serde_json::json!({ "error": err.to_string() });
        HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
            .with_header("Content-Type", "application/json")
            .with_body(body.to_string().into_bytes())
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
