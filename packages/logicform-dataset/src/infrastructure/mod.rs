//! Infrastructure adapters for `QuestionSource`

mod json;

pub use json::{parse_dataset, JsonFileSource};
