mod graph;

pub use graph::ExpressionGraph;
