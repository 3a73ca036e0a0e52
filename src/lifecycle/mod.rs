//! Lifecycle management.
//!
//! The router has a single transition, constructed → ready, taken once at startup.

pub mod startup;

pub use startup::build_router;
