use std::fmt;
use std::str::FromStr;

/// The fixed set of methods a route may be registered under.
///
/// `Any` is not a real HTTP method: it is the catch-all bucket, consulted
/// only after the method-specific bucket misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Any,
}

impl RouteMethod {
    /// Every method, in bucket order.
    pub const ALL: [RouteMethod; 8] = [
        RouteMethod::Get,
        RouteMethod::Post,
        RouteMethod::Put,
        RouteMethod::Delete,
        RouteMethod::Patch,
        RouteMethod::Options,
        RouteMethod::Head,
        RouteMethod::Any,
    ];

    /// Parse a method string, case-insensitively. Returns `None` for
    /// anything outside the fixed set of eight.
    pub fn parse(s: &str) -> Option<RouteMethod> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(RouteMethod::Get),
            "POST" => Some(RouteMethod::Post),
            "PUT" => Some(RouteMethod::Put),
            "DELETE" => Some(RouteMethod::Delete),
            "PATCH" => Some(RouteMethod::Patch),
            "OPTIONS" => Some(RouteMethod::Options),
            "HEAD" => Some(RouteMethod::Head),
            "ANY" => Some(RouteMethod::Any),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
            RouteMethod::Patch => "PATCH",
            RouteMethod::Options => "OPTIONS",
            RouteMethod::Head => "HEAD",
            RouteMethod::Any => "ANY",
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration was given a method outside the fixed set.
///
/// Returned by `Router::add_route`; `Router::map` skips such methods
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod {
    /// The rejected method string, as supplied by the caller.
    pub method: String,
}

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown HTTP method '{}' (expected GET, POST, PUT, DELETE, PATCH, OPTIONS, HEAD or ANY)",
            self.method
        )
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for RouteMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteMethod::parse(s).ok_or_else(|| UnknownMethod {
            method: s.to_string(),
        })
    }
}
