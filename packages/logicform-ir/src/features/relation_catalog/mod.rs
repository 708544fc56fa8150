//! Relation Catalog - relation phrase → predicate + composition strategy
//!
//! Pure configuration: the table is built once (see [`RELATION_CATALOG`]) and
//! only read afterwards, so concurrent runs share it freely.
//!
//! Strategies:
//! - plain / inverted binary relations
//! - activity or pose filter followed by a plain relation
//! - positional composites with an intermediate location entity
//! - shared-attribute equality (`same color`, `same material`)

pub mod domain;
pub mod infrastructure;

pub use domain::{Direction, Placement, RelateRequest, RelationDescriptor};
pub use infrastructure::{RelationCatalog, RELATION_CATALOG};
