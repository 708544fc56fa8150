//! Domain layer for question containers
//!
//! # Domain Models
//!
//! - `Question`: one annotated question with its operation records
//! - `Dataset`: questions in container order, addressable by id
//!
//! # Port Trait
//!
//! - `QuestionSource`: anything a dataset can be loaded from

use serde::{Deserialize, Serialize};

use logicform_ir::OperationRecord;

use crate::{DatasetError, Result};

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// One question of the container
///
/// # Examples
///
/// ```rust
/// use logicform_dataset::domain::Question;
/// use logicform_ir::OperationRecord;
///
/// let q = Question::new("07333408", "Is the sky blue?")
///     .with_semantic(vec![OperationRecord::new("select", "sky", vec![])]);
/// assert_eq!(q.semantic.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Container key
    #[serde(default)]
    pub id: String,

    pub question: String,

    /// Operation records, last one is the root
    #[serde(default)]
    pub semantic: Vec<OperationRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    #[serde(
        default,
        rename = "fullAnswer",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_answer: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            semantic: Vec::new(),
            answer: None,
            full_answer: None,
        }
    }

    pub fn with_semantic(mut self, semantic: Vec<OperationRecord>) -> Self {
        self.semantic = semantic;
        self
    }
}

/// Questions in container order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    questions: Vec<Question>,
}

impl Dataset {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Question by container key
    pub fn get(&self, id: &str) -> Result<&Question> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| DatasetError::question_not_found(id))
    }
}

impl IntoIterator for Dataset {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Source of a dataset
pub trait QuestionSource {
    fn load(&self) -> Result<Dataset>;
}
