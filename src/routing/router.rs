//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Resolve a path to its view, or a name to its path
//! - Return matched route or explicit NotFound
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) path and name lookup via HashMap
//! - Declaration order kept only for listing; lookup is order-independent
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;
use std::fmt;

use crate::config::schema::RouteConfig;
use crate::config::validation::validate_routes;
use crate::error::{ConfigurationError, RouterError};
use crate::history::History;
use crate::routing::matcher::normalize_path;
use crate::routing::route::{Route, ViewId};

/// The route resolver: an immutable table plus the history strategy it reads locations through.
pub struct Router {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    history: Box<dyn History>,
}

impl Router {
    /// Validate the table and compile it. Any invariant violation is fatal.
    pub fn new(history: Box<dyn History>, table: &[RouteConfig]) -> Result<Self, ConfigurationError> {
        validate_routes(table).map_err(ConfigurationError)?;

        let routes: Vec<Route> = table.iter().map(Route::from).collect();
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());
        for (idx, route) in routes.iter().enumerate() {
            by_path.insert(route.key().to_string(), idx);
            by_name.insert(route.name.clone(), idx);
        }

        tracing::debug!(routes = routes.len(), base = history.base(), "Route table compiled");

        Ok(Self {
            routes,
            by_path,
            by_name,
            history,
        })
    }

    /// The full route bound to `path`.
    pub fn matched(&self, path: &str) -> Result<&Route, RouterError> {
        let key = normalize_path(path);
        match self.by_path.get(&key) {
            Some(&idx) => Ok(&self.routes[idx]),
            None => {
                tracing::debug!(path, normalized = %key, "No route matched");
                Err(RouterError::NotFound {
                    path: path.to_string(),
                })
            }
        }
    }

    /// The view bound to `path`.
    pub fn resolve(&self, path: &str) -> Result<&ViewId, RouterError> {
        self.matched(path).map(|route| &route.target)
    }

    /// The path bound to the route named `name`.
    pub fn resolve_by_name(&self, name: &str) -> Result<&str, RouterError> {
        self.by_name
            .get(name)
            .map(|&idx| self.routes[idx].path.as_str())
            .ok_or_else(|| RouterError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Resolve an environment address, stripping the history base first.
    pub fn resolve_location(&self, location: &str) -> Result<&Route, RouterError> {
        let path = self
            .history
            .to_route_path(location)
            .ok_or_else(|| RouterError::OutsideBase {
                location: location.to_string(),
            })?;
        self.matched(&path)
    }

    /// Full address of the route named `name`.
    pub fn href(&self, name: &str) -> Result<String, RouterError> {
        let path = self.resolve_by_name(name)?;
        Ok(self.history.create_href(path))
    }

    /// Route for the history's current location.
    pub fn current_route(&self) -> Result<&Route, RouterError> {
        self.matched(&self.history.location())
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("history", &self.history)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;
    use crate::history::{MemoryHistory, WebHistory};

    fn table() -> Vec<RouteConfig> {
        vec![
            RouteConfig::new("/", "editor", "EditorPage"),
            RouteConfig::new("/preview", "preview", "PreviewPage"),
        ]
    }

    fn router() -> Router {
        Router::new(Box::new(MemoryHistory::default()), &table()).unwrap()
    }

    #[test]
    fn test_resolve() {
        let router = router();
        assert_eq!(router.resolve("/").unwrap().as_str(), "EditorPage");
        assert_eq!(router.resolve("/preview").unwrap().as_str(), "PreviewPage");
        assert_eq!(
            router.resolve("/unknown"),
            Err(RouterError::NotFound { path: "/unknown".into() })
        );
    }

    #[test]
    fn test_resolve_normalizes_input() {
        let router = router();
        assert_eq!(router.resolve("/preview/").unwrap().as_str(), "PreviewPage");
        assert_eq!(router.resolve("/preview?draft=1").unwrap().as_str(), "PreviewPage");
        assert_eq!(router.resolve("").unwrap().as_str(), "EditorPage");
        assert!(router.resolve("/Preview").is_err());
        assert!(router.resolve("/preview/extra").is_err());
    }

    #[test]
    fn test_resolve_by_name() {
        let router = router();
        assert_eq!(router.resolve_by_name("editor"), Ok("/"));
        assert_eq!(router.resolve_by_name("preview"), Ok("/preview"));
        assert_eq!(
            router.resolve_by_name("settings"),
            Err(RouterError::UnknownName { name: "settings".into() })
        );
    }

    #[test]
    fn test_name_miss_is_not_found() {
        let router = router();
        let err = router.resolve_by_name("settings").unwrap_err();
        assert_eq!(err, RouterError::UnknownName { name: "settings".into() });
        assert!(err.is_not_found());
        assert!(router.href("settings").unwrap_err().is_not_found());
    }

    #[test]
    fn test_matched_returns_whole_route() {
        let router = router();
        let route = router.matched("/preview").unwrap();
        assert_eq!(route.name, "preview");
        assert_eq!(route.path, "/preview");
    }

    #[test]
    fn test_duplicates_fail_initialization() {
        let dup_name = vec![
            RouteConfig::new("/", "editor", "EditorPage"),
            RouteConfig::new("/preview", "editor", "PreviewPage"),
        ];
        let err = Router::new(Box::new(MemoryHistory::default()), &dup_name).unwrap_err();
        assert_eq!(err.errors(), &[ValidationError::DuplicateName { name: "editor".into() }]);

        let dup_path = vec![
            RouteConfig::new("/", "editor", "EditorPage"),
            RouteConfig::new("/", "preview", "PreviewPage"),
        ];
        let err = Router::new(Box::new(MemoryHistory::default()), &dup_path).unwrap_err();
        assert_eq!(err.errors(), &[ValidationError::DuplicatePath { path: "/".into() }]);
    }

    #[test]
    fn test_locations_through_web_history() {
        let router = Router::new(Box::new(WebHistory::new("/app/")), &table()).unwrap();
        assert_eq!(router.resolve_location("/app/").unwrap().name, "editor");
        assert_eq!(router.resolve_location("/app/preview").unwrap().name, "preview");
        assert_eq!(
            router.resolve_location("/preview").unwrap_err(),
            RouterError::OutsideBase { location: "/preview".into() }
        );
        assert_eq!(
            router.resolve_location("/app/missing").unwrap_err(),
            RouterError::NotFound { path: "/missing".into() }
        );
        assert_eq!(router.href("editor").unwrap(), "/app/");
        assert_eq!(router.href("preview").unwrap(), "/app/preview");
    }

    #[test]
    fn test_current_route_follows_history() {
        let router = router();
        assert_eq!(router.current_route().unwrap().name, "editor");
        router.history().sync("/preview").unwrap();
        assert_eq!(router.current_route().unwrap().name, "preview");
        router.history().sync("/gone").unwrap();
        assert!(router.current_route().unwrap_err().is_not_found());
    }

    #[test]
    fn test_routes_keep_declaration_order() {
        let router = router();
        let names: Vec<_> = router.routes().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["editor", "preview"]);
        assert_eq!(router.len(), 2);
        assert!(!router.is_empty());
    }
}
