//! Logicform Dataset - question containers and the `logicform` CLI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use logicform_dataset::{Dataset, JsonFileSource, QuestionSource};
//!
//! let dataset = JsonFileSource::new("val_balanced_questions.json").load()?;
//! for question in dataset.iter() {
//!     println!("{}", logicform_ir::convert(&question.semantic)?);
//! }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{DatasetError, ErrorKind, Result};

pub use domain::{Dataset, Question, QuestionSource};
pub use infrastructure::{parse_dataset, JsonFileSource};

impl Dataset {
    /// Load a JSON container from disk
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        JsonFileSource::new(path.as_ref()).load()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_dataset(content)
    }
}
