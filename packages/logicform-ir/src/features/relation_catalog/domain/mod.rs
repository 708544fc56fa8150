//! Relation Catalog Domain - descriptors and their node construction
//!
//! A descriptor turns `(direction, target, source, context)` into an expression
//! node:
//! - `target` is the entity named in the relate argument (`s (12)` → entity 12)
//! - `source` is the primary variable of the relate's dependency
//! - `context` is the dependency set the produced node hangs off

use tracing::debug;

use crate::errors::Result;
use crate::features::expression::{ExpressionGraph, NodeId, NodeKind};
use crate::features::variable_allocator::VariableAllocator;
use crate::shared::models::Variable;

/// Relate direction marker (`s`, `o` or `_` in the argument's last field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Target is the relation's subject: `rel(target, source)`
    Subject,
    /// Target is the relation's object: `rel(source, target)`
    Object,
    /// No marker; ordered like `Object` for plain relations
    Unspecified,
}

impl Direction {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "s" => Some(Self::Subject),
            "o" => Some(Self::Object),
            "_" => Some(Self::Unspecified),
            _ => None,
        }
    }

    /// Relation argument order for `target` and `source`
    pub fn order(&self, target: Variable, source: Variable) -> [Variable; 2] {
        match self {
            Direction::Subject => [target, source],
            Direction::Object | Direction::Unspecified => [source, target],
        }
    }
}

/// Which positional composite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// "on the edge of"
    Edge,
    /// "in the center of"
    Center,
}

/// How a relation phrase becomes an expression node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationDescriptor {
    /// `predicate(a, b)` in direction order
    Plain { predicate: &'static str },

    /// Plain relation with its arguments swapped ("worn on" → `wearing`)
    Inverted { predicate: &'static str },

    /// Filter the first participant to an activity/pose, then relate
    Composite {
        filter_kind: &'static str,
        filter_value: &'static str,
        predicate: &'static str,
    },

    /// Intermediate location entity: `frame(S, ..)` then `anchor(.., S)`
    Positional {
        placement: Placement,
        frame: &'static str,
        anchor: &'static str,
    },

    /// `equals($A, $B)` over one attribute of each participant
    SharedAttribute { attribute: &'static str },
}

/// Inputs of one relation construction
#[derive(Debug, Clone)]
pub struct RelateRequest {
    pub direction: Direction,
    pub target: Variable,
    pub source: Variable,
    pub context: Vec<NodeId>,
}

impl RelationDescriptor {
    /// Build the node(s) for this relation, returning the outermost one
    pub fn build(
        &self,
        request: &RelateRequest,
        graph: &mut ExpressionGraph,
        allocator: &mut VariableAllocator,
    ) -> Result<NodeId> {
        let RelateRequest {
            direction,
            target,
            source,
            ref context,
        } = *request;
        let args = direction.order(target, source);
        let bound = vec![target, source];

        match self {
            RelationDescriptor::Plain { predicate } => {
                graph.relation(*predicate, args, context.clone(), bound)
            }
            RelationDescriptor::Inverted { predicate } => {
                graph.relation(*predicate, [args[1], args[0]], context.clone(), bound)
            }
            RelationDescriptor::Composite {
                filter_kind,
                filter_value,
                predicate,
            } => {
                let filtered =
                    graph.filter(*filter_kind, *filter_value, vec![args[0]], context.clone())?;
                graph.relation(*predicate, args, vec![filtered], bound)
            }
            RelationDescriptor::Positional {
                placement,
                frame,
                anchor,
            } => {
                let spot = Variable::Entity(allocator.fresh()?);
                debug!("positional {:?}: intermediate location {}", placement, spot);

                // Center-of in object mode frames the target and anchors the source;
                // every other combination frames the source and anchors the target.
                let (framed, anchored) = match (placement, direction) {
                    (Placement::Center, Direction::Object) => (target, source),
                    _ => (source, target),
                };
                let frame_node =
                    graph.relation(*frame, [spot, framed], context.clone(), vec![framed, spot])?;
                graph.relation(*anchor, [anchored, spot], vec![frame_node], vec![target])
            }
            RelationDescriptor::SharedAttribute { attribute } => {
                let first = Variable::Entity(allocator.fresh()?);
                let second = Variable::Entity(allocator.fresh()?);
                let first_value = graph.filter(*attribute, first.to_string(), vec![args[0]], vec![])?;
                let second_value =
                    graph.filter(*attribute, second.to_string(), vec![args[1]], vec![])?;

                let mut dependencies = vec![first_value, second_value];
                dependencies.extend(context.iter().copied());
                graph.add(
                    NodeKind::Equals {
                        operands: [first, second],
                    },
                    dependencies,
                    bound,
                )
            }
        }
    }
}
