//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or built-in table) and apply environment overrides
//! - Build the single long-lived router
//!
//! # Design Decisions
//! - Fail fast: a bad route table stops the application
//! - The router is returned by value; callers share it by reference or Arc

use std::path::Path;

use crate::config::loader::{apply_env_overrides, load_config};
use crate::config::schema::RouterConfig;
use crate::error::{ConfigError, ConfigurationError};
use crate::history;
use crate::routing::Router;

/// Build the router a configuration describes.
pub fn build_router(config: &RouterConfig) -> Result<Router, ConfigurationError> {
    let history = history::from_config(&config.history);
    match Router::new(history, &config.routes) {
        Ok(router) => {
            tracing::info!(
                routes = router.len(),
                mode = ?config.history.mode,
                base = router.history().base(),
                "Router ready"
            );
            Ok(router)
        }
        Err(err) => {
            tracing::error!(error = %err, "Route table rejected");
            Err(err)
        }
    }
}

/// Resolve the effective configuration: file if given, defaults otherwise, then `BASE_URL`.
pub fn load(config_path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{HistoryMode, RouteConfig};

    #[test]
    fn test_build_default_router() {
        let router = build_router(&RouterConfig::default()).unwrap();
        assert_eq!(router.len(), 2);
        assert_eq!(router.resolve("/preview").unwrap().as_str(), "PreviewPage");
    }

    #[test]
    fn test_build_memory_router() {
        let mut config = RouterConfig::default();
        config.history.mode = HistoryMode::Memory;
        config.history.base_url = "/app".into();
        let router = build_router(&config).unwrap();
        assert_eq!(router.resolve_location("/preview").unwrap().name, "preview");
        assert_eq!(router.href("preview").unwrap(), "/app/preview");
    }

    #[test]
    fn test_build_rejects_duplicates() {
        let mut config = RouterConfig::default();
        config.routes.push(RouteConfig::new("/", "editor", "EditorPage"));
        let err = build_router(&config).unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }
}
