//! Compiler infrastructure

mod operation_compiler;

pub use operation_compiler::OperationCompiler;
