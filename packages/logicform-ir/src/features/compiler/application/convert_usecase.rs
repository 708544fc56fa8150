//! Convert UseCase

use crate::errors::Result;
use crate::features::compiler::domain::ConversionRun;
use crate::features::compiler::infrastructure::OperationCompiler;
use crate::features::serializer::Connectives;
use crate::shared::models::OperationRecord;

/// Convert UseCase Trait
///
/// Runs share no mutable state, so one implementation may serve many threads.
pub trait ConvertUseCase: Send + Sync {
    /// Logical form of one question's operation records
    fn convert(&self, records: &[OperationRecord]) -> Result<String>;

    /// Compiled run, for callers that inspect individual nodes
    fn compile_run(&self, records: &[OperationRecord]) -> Result<ConversionRun>;
}

/// Convert UseCase Implementation
#[derive(Debug, Clone, Default)]
pub struct ConvertUseCaseImpl {
    compiler: OperationCompiler,
}

impl ConvertUseCaseImpl {
    pub fn new(connectives: Connectives) -> Self {
        Self {
            compiler: OperationCompiler::new(connectives),
        }
    }

    pub fn compiler(&self) -> &OperationCompiler {
        &self.compiler
    }
}

impl ConvertUseCase for ConvertUseCaseImpl {
    fn convert(&self, records: &[OperationRecord]) -> Result<String> {
        self.compiler.compile(records)
    }

    fn compile_run(&self, records: &[OperationRecord]) -> Result<ConversionRun> {
        self.compiler.build(records)
    }
}
