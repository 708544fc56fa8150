//! Expression node variants
//!
//! Closed variant set. Shared bookkeeping (dependencies, bound variables, the
//! identity rendering) lives on [`ExprNode`]; per-variant payload on [`NodeKind`].

use crate::shared::models::Variable;

/// Node ID (index into the run's expression graph)
pub type NodeId = usize;

/// Expression node variant + payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `kind(name, var)`
    Filter { kind: String, name: String },

    /// `name(a, b)`
    Relation { name: String, args: [Variable; 2] },

    /// `exists(var)`
    Exists,

    /// `verify_kind(value, var)`
    Verify { kind: String, value: String },

    /// `query(field, var)`
    Query { field: String },

    /// Transparent at the root; `a and b` when nested
    Conjunction,

    /// Exactly two branches; `Or(a,b)` when nested
    Disjunction,

    /// `equals(a, b)`
    Equals { operands: [Variable; 2] },

    /// `different(attr, v1[, v2])`
    Difference { attribute: String },

    /// `same(attr, v1[, v2])`
    Same { attribute: String },

    /// `query_common(v1, v2)`
    Common,

    /// `cond(cmp(varA, varB), outA, outB)`, outcomes swapped when `mirrored`
    ConditionalChoice {
        comparator: String,
        outcomes: [String; 2],
        mirrored: bool,
    },
}

impl NodeKind {
    /// Variant name (diagnostics and error messages)
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Filter { .. } => "Filter",
            NodeKind::Relation { .. } => "Relation",
            NodeKind::Exists => "Exists",
            NodeKind::Verify { .. } => "Verify",
            NodeKind::Query { .. } => "Query",
            NodeKind::Conjunction => "Conjunction",
            NodeKind::Disjunction => "Disjunction",
            NodeKind::Equals { .. } => "Equals",
            NodeKind::Difference { .. } => "Difference",
            NodeKind::Same { .. } => "Same",
            NodeKind::Common => "Common",
            NodeKind::ConditionalChoice { .. } => "ConditionalChoice",
        }
    }
}

/// Immutable expression node
///
/// Built only through `ExpressionGraph`, which validates arity and computes the
/// rendering once; nothing mutates a node afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNode {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Earlier nodes this one depends on (always smaller ids)
    pub dependencies: Vec<NodeId>,
    /// Bound variables; the first one is the node's primary variable
    pub variables: Vec<Variable>,
    pub(crate) rendered: String,
}

impl ExprNode {
    /// Canonical rendering, also the node's identity for deduplication
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn primary_variable(&self) -> Option<Variable> {
        self.variables.first().copied()
    }

    /// Literal name of a Filter node
    pub fn filter_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Filter { name, .. } => Some(name),
            _ => None,
        }
    }
}
