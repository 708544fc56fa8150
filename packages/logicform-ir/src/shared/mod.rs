//! Shared module - Common types used by every feature
//!
//! Operation records (compiler input) and variable tokens (bound by every
//! expression node) live here so features never depend on each other for them.

pub mod models;

// Re-exports for convenience
pub use models::*;
