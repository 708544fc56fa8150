//! Error types for logicform-ir
//!
//! Every failure of a conversion run is fatal: the run produces either one
//! logical-form string or a [`ConversionError`], never partial output.

use std::fmt;
use thiserror::Error;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown relation phrase, operation keyword or argument shape
    Lookup,
    /// Wrong dependency / operand / branch count for a node variant
    Arity,
    /// More distinct entities than the variable alphabet holds
    AllocationExhausted,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Lookup => "lookup",
            ErrorKind::Arity => "arity",
            ErrorKind::AllocationExhausted => "allocation_exhausted",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for conversion runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{kind}] {message}{}", record_suffix(.record))]
pub struct ConversionError {
    pub kind: ErrorKind,
    pub message: String,
    /// Index of the operation record being compiled when the error surfaced
    pub record: Option<usize>,
}

fn record_suffix(record: &Option<usize>) -> String {
    match record {
        Some(index) => format!(" (record {})", index),
        None => String::new(),
    }
}

impl ConversionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            record: None,
        }
    }

    /// Attach the record index, keeping an index that was already set
    pub fn with_record(mut self, index: usize) -> Self {
        if self.record.is_none() {
            self.record = Some(index);
        }
        self
    }

    // Convenience constructors
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lookup, message)
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Arity, message)
    }

    pub fn exhausted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AllocationExhausted, message)
    }

    pub fn unknown_relation(phrase: &str) -> Self {
        Self::lookup(format!("Unknown relation phrase: '{}'", phrase))
    }

    pub fn unknown_operation(keyword: &str) -> Self {
        Self::lookup(format!("Unknown operation keyword: '{}'", keyword))
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;
