//! In-memory history.
//!
//! Locations are route paths already; the base only shapes generated hrefs.
//! Suited to hosts without an address bar (tests, embedded views, server-side rendering).

use crate::error::RouterError;
use crate::history::{normalize_base, CurrentLocation, History};
use crate::routing::matcher::normalize_path;

#[derive(Debug)]
pub struct MemoryHistory {
    base: String,
    current: CurrentLocation,
}

impl MemoryHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            current: CurrentLocation::new(),
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn to_route_path(&self, location: &str) -> Option<String> {
        Some(normalize_path(location))
    }

    fn location(&self) -> String {
        self.current.get()
    }

    fn sync(&self, location: &str) -> Result<(), RouterError> {
        let path = normalize_path(location);
        tracing::trace!(location, path = %path, "Memory history synced");
        self.current.set(path);
        Ok(())
    }
}
