//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or built-in application table
//!     → loader.rs (parse & deserialize, BASE_URL override)
//!     → validation.rs (uniqueness and well-formedness)
//!     → RouterConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All sections have defaults; an empty file yields the application table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::HistoryConfig;
pub use schema::HistoryMode;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
