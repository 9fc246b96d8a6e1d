//! # Controllers
//!
//! The controller capability consumed by the collector and the dispatcher.
//!
//! ## Overview
//!
//! A controller is a type constructible from the application context alone,
//! exposing a declared, ordered list of actions. Each action carries its
//! route descriptors (repeatable; an action with none is invisible to
//! collection) and a function tagged with whether it wants the live request
//! injected.
//!
//! Controllers are registered into the [`ControllerRegistry`] at startup.
//! Registration erases the concrete type behind boxed construct/invoke
//! closures, so neither collection nor dispatch needs any runtime
//! reflection: the registry *is* the introspection surface.
//!
//! ## Example
//!
//! ```
//! use attroute::controller::{Action, ActionFn, Controller};
//! use attroute::{AppContext, HandlerResult, RouteDescriptor};
//! use serde_json::json;
//!
//! struct UserController;
//!
//! impl UserController {
//!     fn index(&self) -> HandlerResult {
//!         Ok(json!(["alice", "bob"]))
//!     }
//! }
//!
//! impl Controller for UserController {
//!     fn name() -> &'static str {
//!         "UserController"
//!     }
//!
//!     fn construct(_context: &AppContext) -> anyhow::Result<Self> {
//!         Ok(UserController)
//!     }
//!
//!     fn actions() -> Vec<Action<Self>> {
//!         // Empty URI: the collector synthesizes "user" from the names.
//!         vec![Action::new("index", ActionFn::Plain(Self::index))
//!             .route(RouteDescriptor::get(""))]
//!     }
//! }
//! ```

use std::any::Any;
use std::collections::HashMap;

use tracing::debug;

use crate::context::AppContext;
use crate::dispatcher::HandlerResult;
use crate::route::RouteDescriptor;
use crate::server::HttpRequest;

/// Namespace controllers register under when none is declared.
pub const DEFAULT_NAMESPACE: &str = "app::controllers";

/// A routable controller.
///
/// Actions are declared per type, so collection only ever sees a
/// controller's own actions; nothing is picked up from any type it
/// delegates to.
pub trait Controller: Sized + 'static {
    /// Short type name, e.g. `"UserController"`. Used as the controller half
    /// of the `Short@action` handler identity and for default-URI synthesis.
    fn name() -> &'static str;

    /// Namespace used by directory collection to qualify the type name.
    fn namespace() -> &'static str {
        DEFAULT_NAMESPACE
    }

    /// Construct an instance. Runs once per matching request; failures
    /// propagate to the dispatch caller.
    fn construct(context: &AppContext) -> anyhow::Result<Self>;

    /// The controller's declared actions, in declaration order.
    fn actions() -> Vec<Action<Self>>;
}

/// An action function, tagged at declaration time with whether it wants the
/// live request injected.
pub enum ActionFn<C> {
    Plain(fn(&C) -> HandlerResult),
    WithRequest(fn(&C, &HttpRequest) -> HandlerResult),
}

impl<C> Clone for ActionFn<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ActionFn<C> {}

/// One public action on a controller, with its declared route metadata.
pub struct Action<C> {
    name: &'static str,
    call: ActionFn<C>,
    routes: Vec<RouteDescriptor>,
}

impl<C> Action<C> {
    pub fn new(name: &'static str, call: ActionFn<C>) -> Self {
        Action {
            name,
            call,
            routes: Vec::new(),
        }
    }

    /// Attach a route declaration. Repeatable; an action with no routes is
    /// skipped by collection.
    pub fn route(mut self, descriptor: RouteDescriptor) -> Self {
        self.routes.push(descriptor);
        self
    }
}

/// Type-erased action entry held by the registry.
pub struct ErasedAction {
    name: String,
    wants_request: bool,
    routes: Vec<RouteDescriptor>,
    call: Box<dyn Fn(&dyn Any, &HttpRequest) -> HandlerResult + Send + Sync>,
}

impl ErasedAction {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the action was declared `WithRequest`.
    pub fn wants_request(&self) -> bool {
        self.wants_request
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub(crate) fn invoke(&self, instance: &dyn Any, request: &HttpRequest) -> HandlerResult {
        (self.call)(instance, request)
    }
}

/// Registry entry for one controller type.
pub struct ControllerEntry {
    name: String,
    namespace: &'static str,
    construct: Box<dyn Fn(&AppContext) -> anyhow::Result<Box<dyn Any>> + Send + Sync>,
    actions: Vec<ErasedAction>,
}

impl ControllerEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        self.namespace
    }

    pub fn actions(&self) -> &[ErasedAction] {
        &self.actions
    }

    /// Look up an action by name.
    pub fn action(&self, name: &str) -> Option<&ErasedAction> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Construct a fresh instance of the controller.
    pub(crate) fn construct(&self, context: &AppContext) -> anyhow::Result<Box<dyn Any>> {
        (self.construct)(context)
    }
}

/// Name-keyed controller registry owned by the application context.
///
/// Populated at startup; collection and dispatch read it immutably.
#[derive(Default)]
pub struct ControllerRegistry {
    entries: HashMap<String, ControllerEntry>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        ControllerRegistry::default()
    }

    /// Register a controller type, erasing it behind the capability surface.
    /// Re-registering a name replaces the prior entry.
    pub fn register<C: Controller>(&mut self) {
        let actions = C::actions()
            .into_iter()
            .map(|action| {
                let Action { name, call, routes } = action;
                ErasedAction {
                    name: name.to_string(),
                    wants_request: matches!(call, ActionFn::WithRequest(_)),
                    routes,
                    call: Box::new(move |instance, request| {
                        let controller = instance
                            .downcast_ref::<C>()
                            .ok_or_else(|| anyhow::anyhow!("controller instance type mismatch"))?;
                        match call {
                            ActionFn::Plain(f) => f(controller),
                            ActionFn::WithRequest(f) => f(controller, request),
                        }
                    }),
                }
            })
            .collect();
        debug!(controller = C::name(), namespace = C::namespace(), "controller registered");
        self.entries.insert(
            C::name().to_string(),
            ControllerEntry {
                name: C::name().to_string(),
                namespace: C::namespace(),
                construct: Box::new(|context| Ok(Box::new(C::construct(context)?) as Box<dyn Any>)),
                actions,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&ControllerEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
