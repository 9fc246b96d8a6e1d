//! Shared fixtures for integration tests: a small set of controllers, a
//! pre-populated context, and tracing setup.

#![allow(dead_code)]

use std::sync::Arc;

use attroute::controller::{Action, ActionFn, Controller};
use attroute::{AppConfig, AppContext, HandlerResult, HttpRequest, RouteDescriptor, Router};
use serde_json::json;

/// Controller with explicit URIs and a named route.
pub struct HomeController;

impl HomeController {
    fn index(&self) -> HandlerResult {
        Ok(json!("welcome"))
    }

    fn about(&self) -> HandlerResult {
        Ok(json!({"page": "about"}))
    }
}

impl Controller for HomeController {
    fn name() -> &'static str {
        "HomeController"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Ok(HomeController)
    }

    fn actions() -> Vec<Action<Self>> {
        vec![
            Action::new("index", ActionFn::Plain(Self::index))
                .route(RouteDescriptor::get("/").named("home.index")),
            Action::new("about", ActionFn::Plain(Self::about))
                .route(RouteDescriptor::get("/about")),
        ]
    }
}

/// Controller relying on default URI synthesis, mixing plain and
/// request-injected actions plus one unrouted action.
pub struct UserController;

impl UserController {
    fn index(&self) -> HandlerResult {
        Ok(json!(["alice", "bob"]))
    }

    fn show(&self, request: &HttpRequest) -> HandlerResult {
        let id = request.query_param("id").unwrap_or("0");
        Ok(json!({"id": id}))
    }

    fn store(&self) -> HandlerResult {
        Ok(json!({"created": true}))
    }

    fn internal(&self) -> HandlerResult {
        Ok(json!("not routable"))
    }
}

impl Controller for UserController {
    fn name() -> &'static str {
        "UserController"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Ok(UserController)
    }

    fn actions() -> Vec<Action<Self>> {
        vec![
            Action::new("index", ActionFn::Plain(Self::index))
                .route(RouteDescriptor::get("")),
            Action::new("show", ActionFn::WithRequest(Self::show))
                .route(RouteDescriptor::get("")),
            Action::new("store", ActionFn::Plain(Self::store))
                .route(RouteDescriptor::post("").with_middleware(["auth"])),
            Action::new("internal", ActionFn::Plain(Self::internal)),
        ]
    }
}

/// Controller whose constructor always fails.
pub struct FailingController;

impl FailingController {
    fn index(&self) -> HandlerResult {
        Ok(json!("unreachable"))
    }
}

impl Controller for FailingController {
    fn name() -> &'static str {
        "FailingController"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Err(anyhow::anyhow!("database connection refused"))
    }

    fn actions() -> Vec<Action<Self>> {
        vec![Action::new("index", ActionFn::Plain(Self::index))
            .route(RouteDescriptor::get(""))]
    }
}

/// Context with all fixture controllers registered.
pub fn test_context() -> AppContext {
    let mut context = AppContext::new(AppConfig::default());
    context.register_controller::<HomeController>();
    context.register_controller::<UserController>();
    context.register_controller::<FailingController>();
    context
}

/// Empty router over the fixture context.
pub fn test_router() -> Router {
    Router::new(Arc::new(test_context()))
}

/// Install a test-friendly tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
