use crate::errors::{ConversionError, Result};
use crate::features::expression::{ExpressionGraph, NodeId};
use crate::features::variable_allocator::VariableAllocator;
use crate::shared::models::Variable;

/// State of one conversion run
///
/// Owns the variable table and the node arena; `results[i]` is the node that
/// record `i` produced. Discarded once the logical form is rendered.
#[derive(Debug, Default)]
pub struct ConversionRun {
    pub(crate) allocator: VariableAllocator,
    pub(crate) graph: ExpressionGraph,
    results: Vec<NodeId>,
}

impl ConversionRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &ExpressionGraph {
        &self.graph
    }

    pub fn allocator(&self) -> &VariableAllocator {
        &self.allocator
    }

    /// Node produced by each record so far, in record order
    pub fn results(&self) -> &[NodeId] {
        &self.results
    }

    /// Node produced by the last record
    pub fn root(&self) -> Option<NodeId> {
        self.results.last().copied()
    }

    pub(crate) fn push_result(&mut self, node: NodeId) {
        self.results.push(node);
    }

    /// Map record indices to the nodes those records produced
    pub(crate) fn resolve(&self, dependencies: &[usize]) -> Result<Vec<NodeId>> {
        dependencies
            .iter()
            .map(|&index| {
                self.results.get(index).copied().ok_or_else(|| {
                    ConversionError::lookup(format!(
                        "Dependency {} does not refer to an earlier record ({} produced so far)",
                        index,
                        self.results.len()
                    ))
                })
            })
            .collect()
    }

    /// Union of the dependencies' variables, first-seen order
    pub(crate) fn variable_union(&self, dependencies: &[NodeId]) -> Vec<Variable> {
        let mut union: Vec<Variable> = Vec::new();
        for &dep in dependencies {
            for var in &self.graph.node(dep).variables {
                if !union.contains(var) {
                    union.push(*var);
                }
            }
        }
        union
    }
}
