//! Operation Compiler - operation records → expression graph
//!
//! ## Architecture
//!
//! ```text
//! [OperationRecord]
//!       ↓  (in order, dependencies resolve to earlier results)
//! OperationKind dispatch ── ArgumentShape / RelateArgument
//!       ↓                          ↓
//! ExpressionGraph  ◀──────  RelationCatalog
//!       ↓
//! ExpressionSerializer (last record = root)
//! ```
//!
//! Any failure aborts the run; there is no partial output.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ConvertUseCase, ConvertUseCaseImpl};
pub use domain::{ArgumentShape, ConversionRun, OperationKind, RelateArgument};
pub use infrastructure::OperationCompiler;
