//! Typed batch pipeline errors

use thiserror::Error;

use crate::errors::ConversionError;

/// Batch execution errors
#[derive(Error, Debug, Clone)]
pub enum PipelineError {
    /// A question failed while failures were not being skipped
    #[error("Question '{question_id}' failed: {source}")]
    Conversion {
        question_id: String,
        #[source]
        source: ConversionError,
    },

    /// Worker pool could not be built
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}
