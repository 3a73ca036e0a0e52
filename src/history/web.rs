//! Base-URL-prefixed history for browser-style addresses.

use crate::error::RouterError;
use crate::history::{normalize_base, CurrentLocation, History};
use crate::routing::matcher::normalize_path;

/// History whose environment locations carry the application base as a prefix.
#[derive(Debug)]
pub struct WebHistory {
    base: String,
    current: CurrentLocation,
}

impl WebHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            current: CurrentLocation::new(),
        }
    }

    fn strip_base<'a>(&self, location: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(location);
        }
        let rest = location.strip_prefix(self.base.as_str())?;
        // "/app" must not claim "/application"
        match rest.chars().next() {
            None | Some('/') | Some('?') | Some('#') => Some(rest),
            Some(_) => None,
        }
    }
}

impl History for WebHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn to_route_path(&self, location: &str) -> Option<String> {
        self.strip_base(location).map(normalize_path)
    }

    fn location(&self) -> String {
        self.current.get()
    }

    fn sync(&self, location: &str) -> Result<(), RouterError> {
        let path = self
            .to_route_path(location)
            .ok_or_else(|| RouterError::OutsideBase {
                location: location.to_string(),
            })?;
        tracing::trace!(location, path = %path, "Web history synced");
        self.current.set(path);
        Ok(())
    }
}
