use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::context::AppContext;
use crate::dispatcher::{self, Dispatch, DispatchError, HandlerRef};
use crate::route::{RouteMethod, UnknownMethod};
use crate::server::HttpRequest;

/// Strip leading and trailing path separators. The empty string is the root
/// path, so `"/foo/"`, `"foo"` and `"/foo"` all address the same route.
fn normalize_path(uri: &str) -> &str {
    uri.trim_matches('/')
}

/// Pure storage for registered routes: one bucket per method, exact-match
/// lookup, unconditional upsert.
#[derive(Default)]
pub struct RouteTable {
    buckets: HashMap<RouteMethod, HashMap<String, HandlerRef>>,
}

impl RouteTable {
    pub fn new() -> Self {
        RouteTable::default()
    }

    /// Unconditional upsert; re-registering a key replaces the prior
    /// handler.
    pub fn put(&mut self, method: RouteMethod, path: impl Into<String>, handler: HandlerRef) {
        self.buckets
            .entry(method)
            .or_default()
            .insert(path.into(), handler);
    }

    /// Exact-match lookup.
    pub fn get(&self, method: RouteMethod, path: &str) -> Option<&HandlerRef> {
        self.buckets.get(&method).and_then(|bucket| bucket.get(path))
    }

    /// Number of registered routes across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(HashMap::is_empty)
    }
}

/// Maps (method, path) pairs to handlers and drives handler invocation.
pub struct Router {
    table: RouteTable,
    context: Arc<AppContext>,
}

impl Router {
    /// Create a router with an empty table, sharing the application context.
    pub fn new(context: Arc<AppContext>) -> Self {
        Router {
            table: RouteTable::new(),
            context,
        }
    }

    pub fn context(&self) -> &Arc<AppContext> {
        &self.context
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Register a handler for a method given as a string.
    ///
    /// The method is upper-cased and the URI trimmed of path separators.
    /// Fails with [`UnknownMethod`] for anything outside the fixed set of
    /// eight, unlike [`Router::map`], which skips such methods.
    pub fn add_route(
        &mut self,
        method: &str,
        uri: &str,
        handler: impl Into<HandlerRef>,
    ) -> Result<(), UnknownMethod> {
        let method = method.parse::<RouteMethod>()?;
        self.register(method, uri, handler);
        Ok(())
    }

    /// Register the same handler under every recognized method in
    /// `methods`. Unrecognized methods are skipped, not rejected, which is
    /// asymmetric with [`Router::add_route`].
    pub fn map(&mut self, methods: &[&str], uri: &str, handler: impl Into<HandlerRef>) {
        let handler = handler.into();
        for method in methods {
            match RouteMethod::parse(method) {
                Some(method) => self.register(method, uri, handler.clone()),
                None => {
                    warn!(method = %method, uri = %uri, "map(): skipping unrecognized method")
                }
            }
        }
    }

    /// Typed registration used by the collector and the per-method
    /// convenience calls.
    pub fn register(&mut self, method: RouteMethod, uri: &str, handler: impl Into<HandlerRef>) {
        let path = normalize_path(uri);
        debug!(method = %method, path = %path, "route registered");
        self.table.put(method, path, handler.into());
    }

    pub fn get(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Get, uri, handler);
    }

    pub fn post(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Post, uri, handler);
    }

    pub fn put(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Put, uri, handler);
    }

    pub fn delete(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Delete, uri, handler);
    }

    pub fn patch(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Patch, uri, handler);
    }

    pub fn options(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Options, uri, handler);
    }

    pub fn head(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Head, uri, handler);
    }

    /// Register under the `ANY` bucket, matching any method not claimed by a
    /// method-specific registration for the same path.
    pub fn any(&mut self, uri: &str, handler: impl Into<HandlerRef>) {
        self.register(RouteMethod::Any, uri, handler);
    }

    /// Resolve and invoke the handler for a request.
    ///
    /// The path is normalized the same way registration normalizes it. The
    /// method-specific bucket is tried first, then the `ANY` bucket; both
    /// missing is a [`Dispatch::NotFound`] outcome, not an error. A request
    /// method outside the fixed set (e.g. an extension method) can only
    /// match the `ANY` bucket.
    pub fn dispatch(&self, request: &HttpRequest) -> Result<Dispatch, DispatchError> {
        let path = normalize_path(request.path());
        let handler = RouteMethod::parse(request.method())
            .and_then(|method| self.table.get(method, path))
            .or_else(|| self.table.get(RouteMethod::Any, path));

        match handler {
            Some(handler) => {
                debug!(method = %request.method(), path = %path, "route matched");
                let value = dispatcher::invoke(handler, &self.context, request)?;
                Ok(Dispatch::Handled(value))
            }
            None => {
                debug!(method = %request.method(), path = %path, "no route matched");
                Ok(Dispatch::NotFound)
            }
        }
    }
}
