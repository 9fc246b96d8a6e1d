//! # Application Configuration
//!
//! TOML-backed settings loaded at startup. Every field has a default, so a
//! partial file (or none at all) yields a working configuration.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::controller::DEFAULT_NAMESPACE;

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name used in logs.
    pub app_name: String,
    /// Enables verbose diagnostics in embedding applications.
    pub debug: bool,
    /// External base URL of the application, if known.
    pub base_url: Option<String>,
    /// When false, startup skips declared-route collection entirely.
    pub use_attribute_routes: bool,
    /// Directory scanned by directory-based route collection.
    pub controller_dir: PathBuf,
    /// Namespace controllers must be registered under to be collected.
    pub controller_namespace: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: "attroute".to_string(),
            debug: false,
            base_url: None,
            use_attribute_routes: true,
            controller_dir: PathBuf::from("src/controllers"),
            controller_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
