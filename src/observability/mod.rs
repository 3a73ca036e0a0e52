//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / history / startup
//!     → tracing events with structured fields (path, route, view)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Lookup misses log at debug, startup at info, rejected tables at error
//! - No metrics: resolution is a map lookup

pub mod logging;
