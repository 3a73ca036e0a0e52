//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce path and name uniqueness across the route table
//! - Reject malformed paths, names and view identifiers
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: &[RouteConfig] → Result<(), Vec<ValidationError>>
//! - Paths are compared in normalized form, so "/a" and "/a/" collide

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouteConfig;
use crate::routing::matcher::normalize_path;

/// A single violated table invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate path {path:?}")]
    DuplicatePath { path: String },

    #[error("duplicate name {name:?}")]
    DuplicateName { name: String },

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route {path:?} has an empty name")]
    EmptyName { path: String },

    #[error("route {name:?} has no view")]
    EmptyView { name: String },
}

/// Check a route table against every invariant.
pub fn validate_routes(routes: &[RouteConfig]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in routes {
        if let Some(reason) = path_problem(&route.path) {
            errors.push(ValidationError::InvalidPath {
                path: route.path.clone(),
                reason,
            });
        } else if !paths.insert(normalize_path(&route.path)) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
            });
        }

        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName {
                path: route.path.clone(),
            });
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView {
                name: route.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn path_problem(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        Some("path is empty")
    } else if !path.starts_with('/') {
        Some("path must start with '/'")
    } else if path.contains('?') || path.contains('#') {
        Some("path must not contain a query or fragment")
    } else {
        None
    }
}
