//! Compiler domain: operation keywords, argument shapes, run state

mod argument;
mod run;

pub use argument::{normalize_name, parse_direction, ArgumentShape, RelateArgument};
pub use run::ConversionRun;

use crate::errors::{ConversionError, Result};

/// Leading operation keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Select,
    Filter,
    Exist,
    Or,
    And,
    Relate,
    Verify,
    Query,
    Choose,
    Different,
    Same,
    Common,
}

impl OperationKind {
    pub fn from_keyword(keyword: &str) -> Result<Self> {
        match keyword {
            "select" => Ok(Self::Select),
            "filter" => Ok(Self::Filter),
            "exist" => Ok(Self::Exist),
            "or" => Ok(Self::Or),
            "and" => Ok(Self::And),
            "relate" => Ok(Self::Relate),
            "verify" => Ok(Self::Verify),
            "query" => Ok(Self::Query),
            "choose" => Ok(Self::Choose),
            "different" => Ok(Self::Different),
            "same" => Ok(Self::Same),
            "common" => Ok(Self::Common),
            other => Err(ConversionError::unknown_operation(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Filter => "filter",
            Self::Exist => "exist",
            Self::Or => "or",
            Self::And => "and",
            Self::Relate => "relate",
            Self::Verify => "verify",
            Self::Query => "query",
            Self::Choose => "choose",
            Self::Different => "different",
            Self::Same => "same",
            Self::Common => "common",
        }
    }
}

/// Comparators of the two-operand `choose`
pub const CHOICE_COMPARATORS: [&str; 3] = ["younger", "older", "healthier"];
