//! Route table and resolver for the editor single-page application.

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use error::{ConfigurationError, RouterError};
pub use routing::{Route, Router, ViewId};
