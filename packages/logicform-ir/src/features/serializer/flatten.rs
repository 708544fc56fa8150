use rustc_hash::FxHashSet;

use crate::features::expression::{ExpressionGraph, NodeId};

/// Pre-order closure of `root` and its transitive dependencies
pub fn flatten(graph: &ExpressionGraph, root: NodeId) -> Vec<NodeId> {
    flatten_all(graph, std::slice::from_ref(&root))
}

/// Pre-order closure of several roots sharing one deduplication scope
///
/// A node is listed only if no earlier listed node has the same rendering.
/// Traversal still descends below such a duplicate when it is a distinct node,
/// since its dependencies may differ.
pub fn flatten_all(graph: &ExpressionGraph, roots: &[NodeId]) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut rendered: FxHashSet<&str> = FxHashSet::default();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();

    // explicit stack: children pushed in reverse so the first one pops first
    let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let node = graph.node(id);
        if rendered.insert(node.rendered()) {
            order.push(id);
        }
        stack.extend(node.dependencies.iter().rev().copied());
    }

    order
}
