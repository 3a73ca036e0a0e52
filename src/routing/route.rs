//! Route records.

use std::fmt;

use serde::Serialize;

use crate::config::schema::RouteConfig;
use crate::routing::matcher::normalize_path;

/// Opaque reference to a view owned by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A compiled (path, name, target) binding.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Path as declared.
    pub path: String,
    /// Unique symbolic name.
    pub name: String,
    /// View rendered for this route.
    pub target: ViewId,
    #[serde(skip)]
    key: String,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, target: ViewId) -> Self {
        let path = path.into();
        let key = normalize_path(&path);
        Self {
            path,
            name: name.into(),
            target,
            key,
        }
    }

    /// The normalized key this route is looked up by.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<&RouteConfig> for Route {
    fn from(config: &RouteConfig) -> Self {
        Route::new(config.path.clone(), config.name.clone(), ViewId::new(config.view.clone()))
    }
}
