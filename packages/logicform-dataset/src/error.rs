//! Error types for logicform-dataset

use std::fmt;
use thiserror::Error;

use logicform_ir::ConversionError;

/// Dataset error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading the container failed
    IO,
    /// Malformed JSON or question entry
    Serialization,
    /// A question's records failed to convert
    Conversion,
    /// No question with the requested id
    QuestionNotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IO => "io",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Conversion => "conversion",
            ErrorKind::QuestionNotFound => "question_not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dataset error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct DatasetError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl DatasetError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn question_not_found(question_id: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::QuestionNotFound,
            format!("Question not found: {}", question_id.into()),
        )
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::io(format!("I/O error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<ConversionError> for DatasetError {
    fn from(err: ConversionError) -> Self {
        DatasetError::new(ErrorKind::Conversion, err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DatasetError>;
