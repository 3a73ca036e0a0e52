//! Error types shared across the router.
//!
//! # Design Decisions
//! - Lookup misses are values, never panics
//! - Configuration errors collect every violation so a bad table is fixed in one pass

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Recoverable lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No route is bound to the requested path.
    #[error("no route matches path {path:?}")]
    NotFound { path: String },

    /// No route carries the requested name.
    #[error("no route is named {name:?}")]
    UnknownName { name: String },

    /// The location is not under the history base.
    #[error("location {location:?} is outside the application base")]
    OutsideBase { location: String },
}

impl RouterError {
    /// True for every lookup miss; the caller answers it with a fallback view.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RouterError::NotFound { .. }
                | RouterError::UnknownName { .. }
                | RouterError::OutsideBase { .. }
        )
    }
}

/// The route table violates one or more invariants. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid route table: {}", join(.0))]
pub struct ConfigurationError(pub Vec<ValidationError>);

impl ConfigurationError {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}
