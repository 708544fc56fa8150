use super::{flatten, flatten_all, Connectives};
use crate::errors::{ConversionError, Result};
use crate::features::expression::{ExpressionGraph, NodeId, NodeKind};

/// Renders the full expression of a root node
#[derive(Debug, Clone, Default)]
pub struct ExpressionSerializer {
    connectives: Connectives,
}

impl ExpressionSerializer {
    pub fn new(connectives: Connectives) -> Self {
        Self { connectives }
    }

    pub fn connectives(&self) -> &Connectives {
        &self.connectives
    }

    /// Full expression of `root`
    ///
    /// - Disjunction: each of the two branches flattened on its own, joined with
    ///   the disjunction connective
    /// - Conjunction: its dependencies flattened in one scope (the node itself
    ///   is not listed)
    /// - anything else: the node followed by its dependency closure
    pub fn full_expression(&self, graph: &ExpressionGraph, root: NodeId) -> Result<String> {
        let node = graph.node(root);
        match node.kind {
            NodeKind::Disjunction => {
                if node.dependencies.len() != 2 {
                    return Err(ConversionError::arity(format!(
                        "Disjunction requires exactly 2 branches, got {}",
                        node.dependencies.len()
                    )));
                }
                let left = self.join(graph, &flatten(graph, node.dependencies[0]));
                let right = self.join(graph, &flatten(graph, node.dependencies[1]));
                Ok(format!("{}{}{}", left, self.connectives.disjunction, right))
            }
            NodeKind::Conjunction => Ok(self.join(graph, &flatten_all(graph, &node.dependencies))),
            _ => Ok(self.join(graph, &flatten(graph, root))),
        }
    }

    fn join(&self, graph: &ExpressionGraph, ids: &[NodeId]) -> String {
        ids.iter()
            .map(|&id| graph.rendered(id))
            .collect::<Vec<_>>()
            .join(&self.connectives.conjunction)
    }
}
