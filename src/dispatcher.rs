//! # Dispatcher
//!
//! Handler references and handler invocation.
//!
//! ## Overview
//!
//! The route table stores a [`HandlerRef`] per route: either a [`Callable`]
//! registered directly, or a [`ControllerAction`] resolved lazily when a
//! matching request arrives. Invocation is a direct, synchronous call: the
//! table is populated once at startup and dispatch borrows it immutably, so
//! no channel or locking machinery is involved.
//!
//! ## Request injection
//!
//! Whether a handler receives the live request is decided at registration
//! time: callables and controller actions are tagged `Plain` or
//! `WithRequest` when declared. Nothing is inspected per dispatch.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::context::AppContext;
use crate::server::HttpRequest;

/// Result type produced by callables, controller constructors and actions.
///
/// A `Value::String` result is written verbatim by the serving boundary;
/// any other value is serialized as JSON.
pub type HandlerResult = anyhow::Result<Value>;

/// An invocable registered directly with the router.
///
/// The variant fixes the calling convention: `Plain` is invoked with no
/// arguments, `WithRequest` receives the live request.
#[derive(Clone)]
pub enum Callable {
    Plain(Arc<dyn Fn() -> HandlerResult + Send + Sync>),
    WithRequest(Arc<dyn Fn(&HttpRequest) -> HandlerResult + Send + Sync>),
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Plain(_) => f.write_str("Callable::Plain"),
            Callable::WithRequest(_) => f.write_str("Callable::WithRequest"),
        }
    }
}

/// Reference to a controller action, resolved lazily at dispatch time.
///
/// The canonical string encoding is `Short@action` (e.g.
/// `UserController@show`); [`ControllerAction::parse`] and `Display`
/// round-trip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerAction {
    /// Short controller type name within the controller namespace.
    pub controller: String,
    /// Action name on that controller.
    pub action: String,
}

impl ControllerAction {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        ControllerAction {
            controller: controller.into(),
            action: action.into(),
        }
    }

    /// Parse the `Controller@action` encoding. Returns `None` when the `@`
    /// separator is missing or either side is empty.
    pub fn parse(raw: &str) -> Option<ControllerAction> {
        let (controller, action) = raw.split_once('@')?;
        if controller.is_empty() || action.is_empty() {
            return None;
        }
        Some(ControllerAction::new(controller, action))
    }
}

impl fmt::Display for ControllerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.controller, self.action)
    }
}

/// A route's target.
#[derive(Debug, Clone)]
pub enum HandlerRef {
    Callable(Callable),
    Action(ControllerAction),
    /// A string handler that did not match the `Controller@action` form.
    /// Kept verbatim; dispatch rejects it with
    /// [`DispatchError::InvalidHandler`].
    Opaque(String),
}

impl HandlerRef {
    /// Wrap a zero-argument callable.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> HandlerResult + Send + Sync + 'static,
    {
        HandlerRef::Callable(Callable::Plain(Arc::new(f)))
    }

    /// Wrap a callable that receives the live request.
    pub fn from_request_fn<F>(f: F) -> Self
    where
        F: Fn(&HttpRequest) -> HandlerResult + Send + Sync + 'static,
    {
        HandlerRef::Callable(Callable::WithRequest(Arc::new(f)))
    }
}

impl From<&str> for HandlerRef {
    fn from(raw: &str) -> Self {
        match ControllerAction::parse(raw) {
            Some(action) => HandlerRef::Action(action),
            None => HandlerRef::Opaque(raw.to_string()),
        }
    }
}

impl From<String> for HandlerRef {
    fn from(raw: String) -> Self {
        HandlerRef::from(raw.as_str())
    }
}

impl From<ControllerAction> for HandlerRef {
    fn from(action: ControllerAction) -> Self {
        HandlerRef::Action(action)
    }
}

impl From<Callable> for HandlerRef {
    fn from(callable: Callable) -> Self {
        HandlerRef::Callable(callable)
    }
}

/// Outcome of a dispatch.
///
/// A miss is a result, not an error: the serving boundary turns `NotFound`
/// into a 404 response. Resolution failures are [`DispatchError`]s instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// A handler ran; its payload.
    Handled(Value),
    /// Neither the method bucket nor the ANY bucket had the path.
    NotFound,
}

/// Dispatch-time failures. All mean the route matched but the target could
/// not be run; the serving boundary reports them as server errors, never
/// as 404s.
#[derive(Debug)]
pub enum DispatchError {
    /// No controller with this short name is registered.
    ControllerNotFound { controller: String },
    /// The controller exists but declares no action with this name.
    ActionNotFound { controller: String, action: String },
    /// The registered handler is neither a callable nor a recognized
    /// `Controller@action` encoding.
    InvalidHandler { handler: String },
    /// The controller constructor or the handler body failed.
    Handler { source: anyhow::Error },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ControllerNotFound { controller } => {
                write!(f, "controller '{}' not found", controller)
            }
            DispatchError::ActionNotFound { controller, action } => {
                write!(
                    f,
                    "action '{}' not found in controller '{}'",
                    action, controller
                )
            }
            DispatchError::InvalidHandler { handler } => {
                write!(f, "invalid route handler '{}'", handler)
            }
            DispatchError::Handler { source } => {
                write!(f, "handler failed: {}", source)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Invoke a resolved handler.
///
/// Controller actions are resolved here, lazily: the registry is consulted,
/// the controller is constructed (its errors propagate), then the action is
/// looked up on the constructed entry.
pub(crate) fn invoke(
    handler: &HandlerRef,
    context: &AppContext,
    request: &HttpRequest,
) -> Result<Value, DispatchError> {
    match handler {
        HandlerRef::Callable(Callable::Plain(f)) => {
            f().map_err(|source| DispatchError::Handler { source })
        }
        HandlerRef::Callable(Callable::WithRequest(f)) => {
            f(request).map_err(|source| DispatchError::Handler { source })
        }
        HandlerRef::Action(action) => {
            let entry = context.controllers().get(&action.controller).ok_or_else(|| {
                DispatchError::ControllerNotFound {
                    controller: action.controller.clone(),
                }
            })?;
            let instance = entry
                .construct(context)
                .map_err(|source| DispatchError::Handler { source })?;
            let target = entry.action(&action.action).ok_or_else(|| {
                DispatchError::ActionNotFound {
                    controller: action.controller.clone(),
                    action: action.action.clone(),
                }
            })?;
            debug!(
                controller = %action.controller,
                action = %action.action,
                wants_request = target.wants_request(),
                "controller action resolved"
            );
            target
                .invoke(instance.as_ref(), request)
                .map_err(|source| DispatchError::Handler { source })
        }
        HandlerRef::Opaque(raw) => Err(DispatchError::InvalidHandler {
            handler: raw.clone(),
        }),
    }
}
