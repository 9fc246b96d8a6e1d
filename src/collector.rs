//! # Route Collector
//!
//! Startup-time translation of declared controller route metadata into
//! router registrations.
//!
//! ## Overview
//!
//! Controller actions carry [`RouteDescriptor`]s. At process startup the
//! collector walks either an explicit list of registered controllers or a
//! directory of controller source files, reads each action's descriptors,
//! synthesizes a URI when a descriptor leaves it empty, and registers a
//! `Short@action` handler with the router. This runs once; nothing here is
//! touched per request.
//!
//! ## Directory collection
//!
//! The flat listing of `directory` (non-recursive) is sorted by file name so
//! collection order, and therefore which registration wins when two
//! controllers declare the same route, is deterministic. Each `.rs` file
//! stem is converted to an UpperCamelCase candidate type name
//! (`user_controller.rs` → `UserController`); entries with no matching
//! registered controller in the namespace are skipped without error.
//!
//! [`RouteDescriptor`]: crate::route::RouteDescriptor

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::controller::{ControllerEntry, DEFAULT_NAMESPACE};
use crate::dispatcher::ControllerAction;
use crate::router::Router;

/// Errors raised by route collection. All are startup-time configuration
/// faults; none are recovered.
#[derive(Debug)]
pub enum CollectError {
    /// The directory given to directory collection does not exist.
    InvalidDirectory { path: PathBuf },
    /// A controller named in an explicit collection list is not registered.
    UnknownController { name: String },
    /// Reading the directory listing failed.
    Io(std::io::Error),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::InvalidDirectory { path } => {
                write!(f, "directory '{}' does not exist", path.display())
            }
            CollectError::UnknownController { name } => {
                write!(f, "controller '{}' is not registered", name)
            }
            CollectError::Io(err) => {
                write!(f, "failed to read controller directory: {}", err)
            }
        }
    }
}

impl std::error::Error for CollectError {}

/// Collects declared routes from registered controllers into a router.
pub struct RouteCollector<'r> {
    router: &'r mut Router,
}

impl<'r> RouteCollector<'r> {
    pub fn new(router: &'r mut Router) -> Self {
        RouteCollector { router }
    }

    /// Collect routes from each named controller, in the given order.
    /// A name with no registered controller is an error.
    pub fn collect_from_controllers(&mut self, controllers: &[&str]) -> Result<(), CollectError> {
        let context = Arc::clone(self.router.context());
        for name in controllers {
            let entry = context.controllers().get(name).ok_or_else(|| {
                CollectError::UnknownController {
                    name: (*name).to_string(),
                }
            })?;
            self.collect_from_controller(entry);
        }
        Ok(())
    }

    /// Collect from every controller whose source file sits directly under
    /// `directory`, matching against the default namespace.
    pub fn collect_from_directory(&mut self, directory: impl AsRef<Path>) -> Result<(), CollectError> {
        self.collect_from_directory_in(directory, DEFAULT_NAMESPACE)
    }

    /// Collect from `directory`, matching controllers registered under
    /// `namespace`.
    ///
    /// Fails with [`CollectError::InvalidDirectory`] when the directory does
    /// not exist. The enumeration itself is best-effort: non-source files
    /// and candidates with no matching registration are skipped silently.
    pub fn collect_from_directory_in(
        &mut self,
        directory: impl AsRef<Path>,
        namespace: &str,
    ) -> Result<(), CollectError> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(CollectError::InvalidDirectory {
                path: directory.to_path_buf(),
            });
        }

        let mut names: Vec<String> = fs::read_dir(directory)
            .map_err(CollectError::Io)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        // Sorted so duplicate-route overwrites are deterministic.
        names.sort();

        let context = Arc::clone(self.router.context());
        for file_name in names {
            let stem = match file_name.strip_suffix(".rs") {
                Some(stem) => stem,
                None => continue,
            };
            let candidate = type_name_from_stem(stem);
            match context.controllers().get(&candidate) {
                Some(entry) if entry.namespace() == namespace => {
                    info!(file = %file_name, controller = %candidate, "collecting controller routes");
                    self.collect_from_controller(entry);
                }
                _ => {
                    debug!(file = %file_name, candidate = %candidate, "no matching controller, skipped")
                }
            }
        }
        Ok(())
    }

    /// Register every declared route of one controller. Actions without
    /// descriptors are skipped entirely.
    fn collect_from_controller(&mut self, entry: &ControllerEntry) {
        for action in entry.actions() {
            for descriptor in action.routes() {
                let uri = if descriptor.uri().is_empty() {
                    default_uri(entry.name(), action.name())
                } else {
                    descriptor.uri().to_string()
                };
                let handler = ControllerAction::new(entry.name(), action.name());
                debug!(
                    method = %descriptor.method(),
                    uri = %uri,
                    handler = %handler,
                    "collected route"
                );
                self.router.register(descriptor.method(), &uri, handler);
            }
        }
    }
}

/// Derive a controller type name from a source file stem:
/// `user_controller` → `UserController`.
fn type_name_from_stem(stem: &str) -> String {
    stem.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Synthesize the default URI for a descriptor with an empty URI.
///
/// One trailing `Controller` suffix is stripped from the short type name
/// and the remainder lower-cased as the prefix; the `index` action maps to
/// the bare prefix, any other action to `prefix/action`. The result is
/// already in normalized form, with no leading or trailing separators.
fn default_uri(controller: &str, action: &str) -> String {
    let prefix = controller
        .strip_suffix("Controller")
        .unwrap_or(controller)
        .to_lowercase();
    let action = action.to_lowercase();
    if action == "index" {
        prefix
    } else if prefix.is_empty() {
        // No stray leading separator when the prefix is empty.
        action
    } else {
        format!("{}/{}", prefix, action)
    }
}
