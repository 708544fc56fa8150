use serde::{Deserialize, Serialize};

/// Separators used when joining a flattened expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Connectives {
    /// Joins the conjuncts of one branch
    pub conjunction: String,
    /// Joins the two branches of a disjunction
    pub disjunction: String,
}

impl Connectives {
    /// `" and "` / `" or "`
    pub fn canonical() -> Self {
        Self {
            conjunction: " and ".to_string(),
            disjunction: " or ".to_string(),
        }
    }

    /// `", "` / `"; "`
    pub fn compact() -> Self {
        Self {
            conjunction: ", ".to_string(),
            disjunction: "; ".to_string(),
        }
    }
}

impl Default for Connectives {
    fn default() -> Self {
        Self::canonical()
    }
}
