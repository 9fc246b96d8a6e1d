//! # attroute
//!
//! **attroute** is a declarative HTTP route registration and dispatch
//! engine: routes live next to the controller actions they serve, are
//! collected into a router at startup, and are matched by exact path per
//! method at dispatch time.
//!
//! ## Overview
//!
//! The crate does not serve HTTP itself. An embedding application builds an
//! [`AppContext`], registers its controllers, collects or registers routes,
//! and feeds parsed [`HttpRequest`]s into [`Router::dispatch`]. Handlers are
//! either closures registered directly or `Controller@action` references
//! resolved through the controller registry when a matching request
//! arrives.
//!
//! ## Architecture
//!
//! - **[`route`]** - Route methods and declarative route descriptors
//! - **[`router`]** - Method-bucketed route table and exact-match dispatch
//! - **[`dispatcher`]** - Handler references and handler invocation
//! - **[`controller`]** - Controller trait, action declarations, registry
//! - **[`collector`]** - Startup collection of declared routes into a router
//! - **[`server`]** - Request and response types at the serving boundary
//! - **[`config`]** - TOML-backed application settings
//! - **[`context`]** - Shared application state
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use attroute::{AppConfig, AppContext, Dispatch, HandlerRef, HttpRequest, Router};
//! use serde_json::json;
//!
//! let context = Arc::new(AppContext::new(AppConfig::default()));
//! let mut router = Router::new(context);
//!
//! router.get("/health", HandlerRef::from_fn(|| Ok(json!({"status": "ok"}))));
//!
//! let request = HttpRequest::new("GET", "/health");
//! let outcome = router.dispatch(&request).unwrap();
//! assert_eq!(outcome, Dispatch::Handled(json!({"status": "ok"})));
//! ```

pub mod collector;
pub mod config;
pub mod context;
pub mod controller;
pub mod dispatcher;
pub mod route;
pub mod router;
pub mod server;

pub use collector::{CollectError, RouteCollector};
pub use config::AppConfig;
pub use context::AppContext;
pub use controller::{Action, ActionFn, Controller, ControllerRegistry};
pub use dispatcher::{
    Callable, ControllerAction, Dispatch, DispatchError, HandlerRef, HandlerResult,
};
pub use route::{RouteDescriptor, RouteMethod, UnknownMethod};
pub use router::{RouteTable, Router};
pub use server::{HttpRequest, HttpResponse};
