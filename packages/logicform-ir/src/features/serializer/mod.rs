//! Expression Serializer - node DAG → logical-form text
//!
//! ```text
//! root ──flatten──▶ [n0, n1, ...]   (pre-order, deduplicated by rendering)
//!      ──join────▶ "n0 and n1 and ..."
//! ```
//!
//! A Disjunction root flattens its two branches independently and joins them
//! with the disjunction connective.

mod connectives;
mod flatten;
mod serializer;

pub use connectives::Connectives;
pub use flatten::{flatten, flatten_all};
pub use serializer::ExpressionSerializer;
