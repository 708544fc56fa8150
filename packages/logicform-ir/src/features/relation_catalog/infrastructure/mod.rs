mod builtin_relations;

pub use builtin_relations::{RelationCatalog, RELATION_CATALOG};
