//! Common test utilities for logicform-ir
//!
//! Record builders, canned question programs and conversion assertions shared
//! by the integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
