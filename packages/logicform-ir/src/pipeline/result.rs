//! Batch result types

use crate::errors::ConversionError;

/// Result of one question, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// Position in the batch input
    pub index: usize,
    pub id: String,
    pub result: Result<String, ConversionError>,
}

impl QuestionOutcome {
    pub fn logical_form(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ConversionError> {
        self.result.as_ref().err()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<QuestionOutcome>,
    pub converted: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Self {
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        Self {
            converted: outcomes.len() - failed,
            failed,
            outcomes,
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &QuestionOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}
