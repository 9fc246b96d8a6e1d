//! # Application Context
//!
//! Shared application state passed explicitly to everything that needs it.
//!
//! The context owns the loaded configuration and the controller registry.
//! It is assembled once at startup, wrapped in an `Arc`, and handed to the
//! router; controllers receive a borrow of it during construction so they
//! can read configuration or reach other registered services.

use crate::config::AppConfig;
use crate::controller::{Controller, ControllerRegistry};

/// Shared application state: configuration plus the controller registry.
#[derive(Default)]
pub struct AppContext {
    config: AppConfig,
    controllers: ControllerRegistry,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        AppContext {
            config,
            controllers: ControllerRegistry::new(),
        }
    }

    /// Register a controller type so its name can be resolved during route
    /// collection and dispatch.
    pub fn register_controller<C: Controller + 'static>(&mut self) {
        self.controllers.register::<C>();
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }
}
