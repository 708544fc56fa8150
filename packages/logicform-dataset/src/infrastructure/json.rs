//! JSON container adapter
//!
//! The container is one object keyed by question id:
//!
//! ```json
//! {"02930152": {"question": "...", "semantic": [...], "answer": "...", ...}}
//! ```
//!
//! Key order is kept (`serde_json` is built with `preserve_order`). Fields the
//! converter does not use (image ids, annotations, types) are ignored.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{Dataset, Question, QuestionSource};
use crate::{DatasetError, Result};

/// Dataset stored in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileSource {
    fn load(&self) -> Result<Dataset> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DatasetError::io(format!("Cannot read {}: {}", self.path.display(), e)).with_source(e)
        })?;
        let dataset = parse_dataset(&content)?;
        debug!("loaded {} questions from {}", dataset.len(), self.path.display());
        Ok(dataset)
    }
}

/// Parse a container from JSON text
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let entries: Map<String, Value> = serde_json::from_str(content)?;

    let mut questions = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        let mut question: Question = serde_json::from_value(value).map_err(|e| {
            DatasetError::serialization(format!("Question {}: {}", id, e)).with_source(e)
        })?;
        question.id = id;
        questions.push(question);
    }
    Ok(Dataset::new(questions))
}
