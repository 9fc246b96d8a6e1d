use super::RouteMethod;

/// One declared route on a controller action.
///
/// Immutable once constructed. An empty `uri` asks the collector to
/// synthesize one from the controller and action names. The middleware list
/// is carried through registration for forward compatibility; dispatch does
/// not consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    method: RouteMethod,
    uri: String,
    name: Option<String>,
    middleware: Vec<String>,
}

impl RouteDescriptor {
    pub fn new(method: RouteMethod, uri: impl Into<String>) -> Self {
        RouteDescriptor {
            method,
            uri: uri.into(),
            name: None,
            middleware: Vec::new(),
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Get, uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Post, uri)
    }

    pub fn put(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Put, uri)
    }

    pub fn delete(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Delete, uri)
    }

    pub fn patch(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Patch, uri)
    }

    pub fn options(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Options, uri)
    }

    pub fn head(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Head, uri)
    }

    /// A route matching any HTTP method not claimed by a method-specific
    /// registration for the same path.
    pub fn any(uri: impl Into<String>) -> Self {
        RouteDescriptor::new(RouteMethod::Any, uri)
    }

    /// Attach a route name (e.g. `"home.index"`).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an ordered middleware list.
    pub fn with_middleware<I, S>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.middleware = middleware.into_iter().map(Into::into).collect();
        self
    }

    pub fn method(&self) -> RouteMethod {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }
}
