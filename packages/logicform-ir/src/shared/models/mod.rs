//! Shared models

mod operation;
mod variable;

pub use operation::OperationRecord;
pub use variable::{VarToken, Variable, VARIABLE_ALPHABET};
