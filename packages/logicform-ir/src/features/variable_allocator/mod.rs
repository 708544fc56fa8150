//! Variable Allocator - entity ids → variable tokens
//!
//! One allocator per conversion run. Tokens come from the fixed alphabet in
//! first-seen order; a sixth distinct entity is fatal.

mod allocator;

pub use allocator::{EntityId, VariableAllocator, PLACEHOLDER_ID};
