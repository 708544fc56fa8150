//! Operation records - compiler input
//!
//! One annotated reasoning step of a question's semantic parse, as found in the
//! dataset container:
//!
//! ```json
//! {"operation": "relate", "argument": "_,to the left of,s (1234)", "dependencies": [0]}
//! ```

use serde::{Deserialize, Serialize};

/// One reasoning step: operation keyword(s), textual argument, backward dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Whitespace-separated keywords, e.g. `"filter color"`, `"choose less healthy"`
    pub operation: String,

    /// Raw argument text, e.g. `"chair (12)"`, `"red"`, `"_,on,s (4)"`
    #[serde(default)]
    pub argument: String,

    /// Indices of earlier records whose results this step consumes
    #[serde(default)]
    pub dependencies: Vec<usize>,
}

impl OperationRecord {
    pub fn new(
        operation: impl Into<String>,
        argument: impl Into<String>,
        dependencies: Vec<usize>,
    ) -> Self {
        Self {
            operation: operation.into(),
            argument: argument.into(),
            dependencies,
        }
    }

    /// Operation keywords split on whitespace
    pub fn keywords(&self) -> Vec<&str> {
        self.operation.split_whitespace().collect()
    }
}
