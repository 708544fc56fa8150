/*
 * Logicform IR - semantic-parse operation records → logical forms
 *
 * Feature-First Architecture:
 * - shared/      : Common models (OperationRecord, Variable)
 * - features/    : Vertical slices (relation_catalog → variable_allocator →
 *                  expression → serializer → compiler)
 * - config/      : Presets + YAML
 * - pipeline/    : Batch conversion (sequential / rayon)
 *
 * One conversion run per question; runs share only the static relation
 * catalog.
 */

#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Batch pipeline
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{BatchConfig, ConverterConfig, Preset, ValidatedConfig};
pub use errors::{ConversionError, ErrorKind, Result};
pub use features::compiler::{ConvertUseCase, ConvertUseCaseImpl, OperationCompiler};
pub use features::serializer::Connectives;
pub use pipeline::{BatchConverter, BatchItem, BatchReport, QuestionOutcome};
pub use shared::models::{OperationRecord, Variable};

/// Convert one question's records with the canonical connectives
///
/// ```
/// use logicform_ir::{convert, OperationRecord};
///
/// let records = vec![
///     OperationRecord::new("select", "chair (0)", vec![]),
///     OperationRecord::new("query", "color", vec![0]),
/// ];
/// assert_eq!(
///     convert(&records).unwrap(),
///     "query(color, $X) and object(chair, $X)"
/// );
/// ```
pub fn convert(records: &[OperationRecord]) -> Result<String> {
    OperationCompiler::default().compile(records)
}
