//! History strategies.
//!
//! # Data Flow
//! ```text
//! Host environment address ("/app/preview?x=1")
//!     → History::to_route_path (strip base)
//!     → route path ("/preview")
//!     → Router::resolve
//!
//! Router::href(name)
//!     → route path
//!     → History::create_href (prefix base)
//!     → address ("/app/preview")
//! ```
//!
//! # Design Decisions
//! - The strategy only translates and remembers locations; navigation UX belongs to the host
//! - Current location is swapped atomically, so a shared router needs no lock

pub mod memory;
pub mod web;

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::{HistoryConfig, HistoryMode};
use crate::error::RouterError;
use crate::routing::matcher::normalize_path;

pub use memory::MemoryHistory;
pub use web::WebHistory;

/// Synchronizes the router's notion of "current path" with the host environment.
pub trait History: Send + Sync + fmt::Debug {
    /// Normalized base ("" when the app is served from the root).
    fn base(&self) -> &str;

    /// Translate an environment location into a route path.
    /// Returns `None` when the location lies outside this history's base.
    fn to_route_path(&self, location: &str) -> Option<String>;

    /// Build the environment address for a route path.
    fn create_href(&self, path: &str) -> String {
        let path = normalize_path(path);
        format!("{}{}", self.base(), path)
    }

    /// Current route path.
    fn location(&self) -> String;

    /// Record a location reported by the environment.
    fn sync(&self, location: &str) -> Result<(), RouterError>;
}

/// Build the strategy a configuration asks for.
pub fn from_config(config: &HistoryConfig) -> Box<dyn History> {
    match config.mode {
        HistoryMode::Web => Box::new(WebHistory::new(&config.base_url)),
        HistoryMode::Memory => Box::new(MemoryHistory::new(&config.base_url)),
    }
}

/// Normalize a base URL: origin dropped, leading slash ensured, trailing slashes stripped.
///
/// `"/"`, `""` and `"https://example.com/"` all become `""`.
pub fn normalize_base(base: &str) -> String {
    let mut base = base.trim();

    if let Some(idx) = base.find("://") {
        let after_scheme = &base[idx + 3..];
        base = after_scheme
            .find('/')
            .map(|slash| &after_scheme[slash..])
            .unwrap_or("");
    }

    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return String::new();
    }

    if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{}", base)
    }
}

/// Atomically swappable current route path.
#[derive(Debug)]
pub(crate) struct CurrentLocation(ArcSwap<String>);

impl CurrentLocation {
    pub(crate) fn new() -> Self {
        Self(ArcSwap::from_pointee("/".to_string()))
    }

    pub(crate) fn get(&self) -> String {
        (**self.0.load()).clone()
    }

    pub(crate) fn set(&self, path: String) {
        self.0.store(Arc::new(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base("/nested/app//"), "/nested/app");
        assert_eq!(normalize_base("https://example.com/"), "");
        assert_eq!(normalize_base("https://example.com"), "");
        assert_eq!(normalize_base("https://example.com/app/"), "/app");
    }

    #[test]
    fn test_from_config_selects_strategy() {
        let web = from_config(&HistoryConfig {
            mode: HistoryMode::Web,
            base_url: "/app/".into(),
        });
        assert_eq!(web.base(), "/app");
        assert_eq!(web.to_route_path("/elsewhere"), None);

        let memory = from_config(&HistoryConfig {
            mode: HistoryMode::Memory,
            base_url: "/app/".into(),
        });
        assert_eq!(memory.base(), "/app");
        assert_eq!(memory.to_route_path("/elsewhere").as_deref(), Some("/elsewhere"));
    }
}
