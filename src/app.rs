//! The application's route table.
//!
//! Two views: the editor at `/` and the preview at `/preview`.
//! No catch-all route is configured; misses surface as `RouterError::NotFound`.

use crate::config::loader::env_base_url;
use crate::config::schema::RouteConfig;
use crate::error::ConfigurationError;
use crate::history::WebHistory;
use crate::routing::Router;

/// Editor view identifier.
pub const EDITOR: &str = "EditorPage";
/// Preview view identifier.
pub const PREVIEW: &str = "PreviewPage";

pub const EDITOR_ROUTE: &str = "editor";
pub const PREVIEW_ROUTE: &str = "preview";

pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", EDITOR_ROUTE, EDITOR),
        RouteConfig::new("/preview", PREVIEW_ROUTE, PREVIEW),
    ]
}

/// Build the application's router on web history under `base_url`.
pub fn create_router(base_url: &str) -> Result<Router, ConfigurationError> {
    Router::new(Box::new(WebHistory::new(base_url)), &default_routes())
}

/// Base URL injected by the environment, `/` when unset.
pub fn base_url_from_env() -> String {
    env_base_url().unwrap_or_else(|| "/".to_string())
}
