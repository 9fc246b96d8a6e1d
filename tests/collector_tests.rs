//! Tests for startup route collection: explicit controller lists,
//! directory scanning, default URI synthesis, and collection errors.

mod common;

use std::fs;
use std::sync::Arc;

use attroute::controller::{Action, ActionFn, Controller};
use attroute::{
    AppConfig, AppContext, CollectError, Dispatch, HandlerRef, HandlerResult, HttpRequest,
    RouteCollector, RouteDescriptor, RouteMethod, Router,
};
use serde_json::json;

#[test]
fn test_collects_default_uris_from_names() {
    common::init_tracing();
    let mut router = common::test_router();
    RouteCollector::new(&mut router)
        .collect_from_controllers(&["UserController"])
        .unwrap();

    // Only index collapses to the bare prefix; every other action gets
    // prefix/action, whatever its method.
    let outcome = router.dispatch(&HttpRequest::new("GET", "/user")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!(["alice", "bob"])));

    let outcome = router
        .dispatch(&HttpRequest::new("GET", "/user/show?id=7"))
        .unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!({"id": "7"})));

    let outcome = router
        .dispatch(&HttpRequest::new("POST", "/user/store"))
        .unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!({"created": true})));

    // The bare prefix is not registered under POST.
    let outcome = router.dispatch(&HttpRequest::new("POST", "/user")).unwrap();
    assert_eq!(outcome, Dispatch::NotFound);
}

#[test]
fn test_collects_explicit_uris() {
    let mut router = common::test_router();
    RouteCollector::new(&mut router)
        .collect_from_controllers(&["HomeController"])
        .unwrap();

    let outcome = router.dispatch(&HttpRequest::new("GET", "/")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!("welcome")));

    let outcome = router.dispatch(&HttpRequest::new("GET", "/about")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!({"page": "about"})));
}

#[test]
fn test_unrouted_actions_are_not_collected() {
    let mut router = common::test_router();
    RouteCollector::new(&mut router)
        .collect_from_controllers(&["UserController"])
        .unwrap();

    let outcome = router
        .dispatch(&HttpRequest::new("GET", "/user/internal"))
        .unwrap();
    assert_eq!(outcome, Dispatch::NotFound);
}

#[test]
fn test_collected_handler_is_a_controller_action() {
    let mut router = common::test_router();
    RouteCollector::new(&mut router)
        .collect_from_controllers(&["UserController"])
        .unwrap();

    match router.table().get(RouteMethod::Get, "user") {
        Some(HandlerRef::Action(action)) => {
            assert_eq!(action.to_string(), "UserController@index")
        }
        other => panic!("unexpected handler: {other:?}"),
    }
}

#[test]
fn test_unknown_controller_name_is_an_error() {
    let mut router = common::test_router();
    let err = RouteCollector::new(&mut router)
        .collect_from_controllers(&["GhostController"])
        .unwrap_err();
    match err {
        CollectError::UnknownController { name } => assert_eq!(name, "GhostController"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_directory_collection_matches_file_stems() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("home_controller.rs"), "").unwrap();
    fs::write(dir.path().join("user_controller.rs"), "").unwrap();
    fs::write(dir.path().join("stray_controller.rs"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let mut router = common::test_router();
    RouteCollector::new(&mut router)
        .collect_from_directory(dir.path())
        .unwrap();

    // Both registered controllers were collected; the stray file and the
    // non-source file were skipped without error.
    let outcome = router.dispatch(&HttpRequest::new("GET", "/")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!("welcome")));
    let outcome = router.dispatch(&HttpRequest::new("GET", "/user")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!(["alice", "bob"])));
}

#[test]
fn test_missing_directory_is_an_error() {
    let mut router = common::test_router();
    let err = RouteCollector::new(&mut router)
        .collect_from_directory("/nonexistent/controllers")
        .unwrap_err();
    assert!(matches!(err, CollectError::InvalidDirectory { .. }));
}

struct AlphaController;

impl AlphaController {
    fn index(&self) -> HandlerResult {
        Ok(json!("alpha"))
    }
}

impl Controller for AlphaController {
    fn name() -> &'static str {
        "AlphaController"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Ok(AlphaController)
    }

    fn actions() -> Vec<Action<Self>> {
        vec![Action::new("index", ActionFn::Plain(Self::index))
            .route(RouteDescriptor::get("/dup"))]
    }
}

struct BetaController;

impl BetaController {
    fn index(&self) -> HandlerResult {
        Ok(json!("beta"))
    }
}

impl Controller for BetaController {
    fn name() -> &'static str {
        "BetaController"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Ok(BetaController)
    }

    fn actions() -> Vec<Action<Self>> {
        vec![Action::new("index", ActionFn::Plain(Self::index))
            .route(RouteDescriptor::get("/dup"))]
    }
}

#[test]
fn test_duplicate_route_last_collected_wins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("beta_controller.rs"), "").unwrap();
    fs::write(dir.path().join("alpha_controller.rs"), "").unwrap();

    let mut context = AppContext::new(AppConfig::default());
    context.register_controller::<AlphaController>();
    context.register_controller::<BetaController>();
    let mut router = Router::new(Arc::new(context));

    RouteCollector::new(&mut router)
        .collect_from_directory(dir.path())
        .unwrap();

    // Sorted file order: alpha before beta, so beta's registration wins.
    assert_eq!(router.table().len(), 1);
    let outcome = router.dispatch(&HttpRequest::new("GET", "/dup")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!("beta")));
}

struct AdminController;

impl AdminController {
    fn index(&self) -> HandlerResult {
        Ok(json!("admin"))
    }
}

impl Controller for AdminController {
    fn name() -> &'static str {
        "AdminController"
    }

    fn namespace() -> &'static str {
        "app::admin"
    }

    fn construct(_context: &AppContext) -> anyhow::Result<Self> {
        Ok(AdminController)
    }

    fn actions() -> Vec<Action<Self>> {
        vec![Action::new("index", ActionFn::Plain(Self::index))
            .route(RouteDescriptor::get(""))]
    }
}

#[test]
fn test_directory_collection_respects_namespace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("admin_controller.rs"), "").unwrap();

    let mut context = AppContext::new(AppConfig::default());
    context.register_controller::<AdminController>();
    let mut router = Router::new(Arc::new(context));

    // Default namespace does not match, so nothing is collected.
    RouteCollector::new(&mut router)
        .collect_from_directory(dir.path())
        .unwrap();
    assert!(router.table().is_empty());

    // The declared namespace does.
    RouteCollector::new(&mut router)
        .collect_from_directory_in(dir.path(), "app::admin")
        .unwrap();
    let outcome = router.dispatch(&HttpRequest::new("GET", "/admin")).unwrap();
    assert_eq!(outcome, Dispatch::Handled(json!("admin")));
}
