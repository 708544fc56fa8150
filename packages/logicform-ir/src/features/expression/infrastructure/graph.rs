//! Expression graph - per-run node arena
//!
//! Nodes are appended only; a node may depend on earlier nodes only, so the
//! dependency graph is a DAG by construction.

use crate::errors::{ConversionError, Result};
use crate::features::expression::domain::{ExprNode, NodeId, NodeKind};
use crate::shared::models::Variable;

/// Append-only arena of expression nodes for one conversion run
#[derive(Debug, Default)]
pub struct ExpressionGraph {
    nodes: Vec<ExprNode>,
}

impl ExpressionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node by id (ids are only ever issued by this graph)
    pub fn node(&self, id: NodeId) -> &ExprNode {
        &self.nodes[id]
    }

    pub fn get(&self, id: NodeId) -> Option<&ExprNode> {
        self.nodes.get(id)
    }

    pub fn rendered(&self, id: NodeId) -> &str {
        self.nodes[id].rendered()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExprNode> {
        self.nodes.iter()
    }

    /// Primary variable of `id`, required by most consumers
    pub fn primary_variable(&self, id: NodeId) -> Result<Variable> {
        let node = self.node(id);
        node.primary_variable().ok_or_else(|| {
            ConversionError::arity(format!(
                "{} node '{}' binds no variable",
                node.kind.name(),
                node.rendered()
            ))
        })
    }

    /// Validate, render and append a node
    pub fn add(
        &mut self,
        kind: NodeKind,
        dependencies: Vec<NodeId>,
        variables: Vec<Variable>,
    ) -> Result<NodeId> {
        let id = self.nodes.len();
        if let Some(bad) = dependencies.iter().find(|&&dep| dep >= id) {
            return Err(ConversionError::lookup(format!(
                "{} depends on unknown node {}",
                kind.name(),
                bad
            )));
        }
        check_arity(&kind, dependencies.len(), variables.len())?;

        let rendered = self.render(&kind, &dependencies, &variables);
        self.nodes.push(ExprNode {
            id,
            kind,
            dependencies,
            variables,
            rendered,
        });
        Ok(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Variant constructors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn filter(
        &mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
        variables: Vec<Variable>,
        dependencies: Vec<NodeId>,
    ) -> Result<NodeId> {
        let kind = NodeKind::Filter {
            kind: kind.into(),
            name: name.into(),
        };
        self.add(kind, dependencies, variables)
    }

    pub fn relation(
        &mut self,
        name: impl Into<String>,
        args: [Variable; 2],
        dependencies: Vec<NodeId>,
        variables: Vec<Variable>,
    ) -> Result<NodeId> {
        let kind = NodeKind::Relation {
            name: name.into(),
            args,
        };
        self.add(kind, dependencies, variables)
    }

    pub fn disjunction(
        &mut self,
        branches: Vec<NodeId>,
        variables: Vec<Variable>,
    ) -> Result<NodeId> {
        self.add(NodeKind::Disjunction, branches, variables)
    }

    pub fn conjunction(
        &mut self,
        dependencies: Vec<NodeId>,
        variables: Vec<Variable>,
    ) -> Result<NodeId> {
        self.add(NodeKind::Conjunction, dependencies, variables)
    }

    fn render(&self, kind: &NodeKind, dependencies: &[NodeId], variables: &[Variable]) -> String {
        // check_arity guarantees the indexed variables exist
        match kind {
            NodeKind::Filter { kind, name } => format!("{}({}, {})", kind, name, variables[0]),
            NodeKind::Relation { name, args } => format!("{}({}, {})", name, args[0], args[1]),
            NodeKind::Exists => format!("exists({})", variables[0]),
            NodeKind::Verify { kind, value } => {
                format!("verify_{}({}, {})", kind, value, variables[0])
            }
            NodeKind::Query { field } => format!("query({}, {})", field, variables[0]),
            NodeKind::Conjunction => self.join_rendered(dependencies, " and "),
            NodeKind::Disjunction => format!("Or({})", self.join_rendered(dependencies, ",")),
            NodeKind::Equals { operands } => format!("equals({}, {})", operands[0], operands[1]),
            NodeKind::Difference { attribute } => comparison("different", attribute, variables),
            NodeKind::Same { attribute } => comparison("same", attribute, variables),
            NodeKind::Common => format!("query_common({}, {})", variables[0], variables[1]),
            NodeKind::ConditionalChoice {
                comparator,
                outcomes,
                mirrored,
            } => {
                let test = format!("{}({}, {})", comparator, variables[0], variables[1]);
                let (then, otherwise) = if *mirrored {
                    (&outcomes[1], &outcomes[0])
                } else {
                    (&outcomes[0], &outcomes[1])
                };
                format!("cond({}, {}, {})", test, then, otherwise)
            }
        }
    }

    fn join_rendered(&self, ids: &[NodeId], separator: &str) -> String {
        ids.iter()
            .map(|&id| self.rendered(id))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn comparison(name: &str, attribute: &str, variables: &[Variable]) -> String {
    if variables.len() == 2 {
        format!("{}({}, {}, {})", name, attribute, variables[0], variables[1])
    } else {
        format!("{}({}, {})", name, attribute, variables[0])
    }
}

/// Fixed dependency / variable counts per variant
fn check_arity(kind: &NodeKind, deps: usize, vars: usize) -> Result<()> {
    let ok = match kind {
        NodeKind::Filter { .. } => vars >= 1,
        NodeKind::Relation { .. } => true,
        NodeKind::Exists | NodeKind::Verify { .. } | NodeKind::Query { .. } => {
            deps == 1 && vars >= 1
        }
        NodeKind::Conjunction => deps >= 1,
        NodeKind::Disjunction => deps == 2,
        // two operand filters, then the relate context
        NodeKind::Equals { .. } => deps >= 2 && vars == 2,
        NodeKind::Difference { .. } | NodeKind::Same { .. } => {
            deps >= 1 && (vars == 1 || vars == 2)
        }
        NodeKind::Common | NodeKind::ConditionalChoice { .. } => deps == 2 && vars == 2,
    };

    if ok {
        Ok(())
    } else if matches!(kind, NodeKind::Disjunction) {
        Err(ConversionError::arity(format!(
            "Disjunction requires exactly 2 branches, got {}",
            deps
        )))
    } else {
        Err(ConversionError::arity(format!(
            "{} cannot take {} dependencies and {} variables",
            kind.name(),
            deps,
            vars
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::shared::models::VarToken;

    fn var(i: usize) -> Variable {
        Variable::Entity(VarToken::nth(i).unwrap())
    }

    #[test]
    fn test_filter_and_relation_rendering() {
        let mut g = ExpressionGraph::new();
        let chair = g.filter("object", "chair", vec![var(0)], vec![]).unwrap();
        let rel = g
            .relation("on_top_of", [var(0), var(1)], vec![chair], vec![var(0), var(1)])
            .unwrap();
        assert_eq!(g.rendered(chair), "object(chair, $X)");
        assert_eq!(g.rendered(rel), "on_top_of($X, $Y)");
    }

    #[test]
    fn test_verify_query_exists_rendering() {
        let mut g = ExpressionGraph::new();
        let sel = g.filter("object", "cup", vec![var(2)], vec![]).unwrap();
        let verify = g
            .add(
                NodeKind::Verify {
                    kind: "color".into(),
                    value: "white".into(),
                },
                vec![sel],
                vec![var(2)],
            )
            .unwrap();
        let query = g
            .add(NodeKind::Query { field: "name".into() }, vec![sel], vec![var(2)])
            .unwrap();
        let exists = g.add(NodeKind::Exists, vec![sel], vec![var(2)]).unwrap();
        assert_eq!(g.rendered(verify), "verify_color(white, $Z)");
        assert_eq!(g.rendered(query), "query(name, $Z)");
        assert_eq!(g.rendered(exists), "exists($Z)");
    }

    #[test]
    fn test_comparison_shapes() {
        let mut g = ExpressionGraph::new();
        let a = g.filter("object", "cat", vec![var(0)], vec![]).unwrap();
        let b = g.filter("object", "dog", vec![var(1)], vec![]).unwrap();
        let pair = g
            .add(
                NodeKind::Same {
                    attribute: "color".into(),
                },
                vec![a, b],
                vec![var(0), var(1)],
            )
            .unwrap();
        let single = g
            .add(
                NodeKind::Difference {
                    attribute: "type".into(),
                },
                vec![a],
                vec![var(0)],
            )
            .unwrap();
        assert_eq!(g.rendered(pair), "same(color, $X, $Y)");
        assert_eq!(g.rendered(single), "different(type, $X)");
    }

    #[test]
    fn test_conditional_choice_mirroring() {
        let mut g = ExpressionGraph::new();
        let a = g.filter("object", "apple", vec![var(0)], vec![]).unwrap();
        let b = g.filter("object", "cake", vec![var(1)], vec![]).unwrap();
        let straight = g
            .add(
                NodeKind::ConditionalChoice {
                    comparator: "healthier".into(),
                    outcomes: ["apple".into(), "cake".into()],
                    mirrored: false,
                },
                vec![a, b],
                vec![var(0), var(1)],
            )
            .unwrap();
        let mirrored = g
            .add(
                NodeKind::ConditionalChoice {
                    comparator: "healthier".into(),
                    outcomes: ["apple".into(), "cake".into()],
                    mirrored: true,
                },
                vec![a, b],
                vec![var(0), var(1)],
            )
            .unwrap();
        assert_eq!(g.rendered(straight), "cond(healthier($X, $Y), apple, cake)");
        assert_eq!(g.rendered(mirrored), "cond(healthier($X, $Y), cake, apple)");
    }

    #[test]
    fn test_nested_connective_renderings() {
        let mut g = ExpressionGraph::new();
        let a = g.filter("color", "red", vec![var(0)], vec![]).unwrap();
        let b = g.filter("color", "blue", vec![var(0)], vec![]).unwrap();
        let or = g.disjunction(vec![a, b], vec![var(0)]).unwrap();
        let and = g.conjunction(vec![a, b], vec![var(0)]).unwrap();
        assert_eq!(g.rendered(or), "Or(color(red, $X),color(blue, $X))");
        assert_eq!(g.rendered(and), "color(red, $X) and color(blue, $X)");
    }

    #[test]
    fn test_disjunction_requires_two_branches() {
        let mut g = ExpressionGraph::new();
        let a = g.filter("color", "red", vec![var(0)], vec![]).unwrap();
        let b = g.filter("color", "blue", vec![var(0)], vec![]).unwrap();
        let c = g.filter("color", "green", vec![var(0)], vec![]).unwrap();

        let err = g.disjunction(vec![a, b, c], vec![var(0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Arity);
        assert!(g.disjunction(vec![a], vec![var(0)]).is_err());
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_forward_dependency_rejected() {
        let mut g = ExpressionGraph::new();
        let err = g.add(NodeKind::Exists, vec![0], vec![var(0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lookup);
    }

    #[test]
    fn test_common_requires_two_variables() {
        let mut g = ExpressionGraph::new();
        let a = g.filter("object", "cat", vec![var(0)], vec![]).unwrap();
        let b = g.filter("object", "dog", vec![var(1)], vec![]).unwrap();
        assert!(g.add(NodeKind::Common, vec![a, b], vec![var(0)]).is_err());
        let common = g
            .add(NodeKind::Common, vec![a, b], vec![var(0), var(1)])
            .unwrap();
        assert_eq!(g.rendered(common), "query_common($X, $Y)");
    }
}
