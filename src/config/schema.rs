//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::app;

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy and base URL.
    pub history: HistoryConfig,

    /// Route table. Defaults to the application's own routes.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            routes: app::default_routes(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Which history strategy backs the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Base-URL-prefixed browser addresses.
    #[default]
    Web,
    /// In-memory location tracking.
    Memory,
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,

    /// Prefix the application is served under (e.g., "/app/").
    pub base_url: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Web,
            base_url: "/".to_string(),
        }
    }
}

/// One (path, name, view) binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. "/preview".
    pub path: String,

    /// Symbolic name used for reverse lookup.
    pub name: String,

    /// Identifier of the view the application renders for this route.
    pub view: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
