//! Expression Node Model
//!
//! ## Architecture
//!
//! ```text
//! NodeKind (closed variant set)
//!       ↓
//! ExpressionGraph::add  (arity check + canonical rendering, once)
//!       ↓
//! ExprNode (immutable, identity = rendered string)
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ExprNode, NodeId, NodeKind};
pub use infrastructure::ExpressionGraph;
