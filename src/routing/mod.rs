//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path ("/preview/?draft=1")
//!     → matcher.rs (normalize to "/preview")
//!     → router.rs (path index lookup)
//!     → Return: matched Route (view target) or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → validate (unique paths and names)
//!     → Normalize paths into lookup keys
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal paths only, no patterns or params
//! - Deterministic: same input always matches same route
//! - Paths are unique, so there is no priority order to resolve

pub mod matcher;
pub mod route;
pub mod router;

pub use route::{Route, ViewId};
pub use router::Router;
