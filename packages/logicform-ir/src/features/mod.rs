//! Feature modules - each feature follows the domain / application /
//! infrastructure split where it has more than one layer
//!
//! Leaves first:
//! - relation_catalog   - relation phrase → construction strategy
//! - variable_allocator - entity id → variable token, per run
//! - expression         - node variants, renderings, per-run arena
//! - serializer         - flatten + join into the logical form
//! - compiler           - operation records → expression graph

pub mod compiler;
pub mod expression;
pub mod relation_catalog;
pub mod serializer;
pub mod variable_allocator;
