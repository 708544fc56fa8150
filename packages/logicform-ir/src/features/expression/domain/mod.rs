//! Expression Node Model - Domain

mod node;

pub use node::{ExprNode, NodeId, NodeKind};
