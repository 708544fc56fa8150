//! Argument text shapes
//!
//! Shapes overlap (`chair(3)` is also a prefix of a bare name), so they are
//! tried most specific first.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ConversionError, Result};
use crate::features::relation_catalog::Direction;
use crate::features::variable_allocator::PLACEHOLDER_ID;

lazy_static! {
    // SAFETY: compile-time constant patterns, known to be valid
    static ref EXPLICIT_ID: Regex = Regex::new(r"^((\w+(?:-\w+)?\s?)+)\((\d+)\)").unwrap();
    static ref PLACEHOLDER: Regex = Regex::new(r"^((\w+(?:-\w+)?\s?)+)\((-)\)").unwrap();
    static ref BARE_NAME: Regex = Regex::new(r"^((\w+(?:-\w+)?\s?)+)$").unwrap();
    static ref GROUP: Regex = Regex::new(r"^(\w+)\s\((\d+(,\d+)+)\)").unwrap();
    static ref DIRECTION: Regex = Regex::new(r"^\s*([so_])\s*\((.*)\)").unwrap();
}

/// Classified `select` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentShape {
    /// `name(12)`, `name(-)` or bare `name` (empty id)
    Entity { name: String, id: String },
    /// `name (1,2,3)`, bound as one list-typed variable
    Group { name: String, ids: String },
}

impl ArgumentShape {
    pub fn classify(argument: &str) -> Result<Self> {
        if let Some(caps) = EXPLICIT_ID.captures(argument) {
            return Ok(Self::Entity {
                name: normalize_name(&caps[1]),
                id: caps[3].to_string(),
            });
        }
        if let Some(caps) = PLACEHOLDER.captures(argument) {
            return Ok(Self::Entity {
                name: normalize_name(&caps[1]),
                id: PLACEHOLDER_ID.to_string(),
            });
        }
        if let Some(caps) = BARE_NAME.captures(argument) {
            return Ok(Self::Entity {
                name: normalize_name(&caps[1]),
                id: String::new(),
            });
        }
        if let Some(caps) = GROUP.captures(argument) {
            return Ok(Self::Group {
                name: normalize_name(&caps[1]),
                ids: caps[2].to_string(),
            });
        }

        Err(ConversionError::lookup(format!(
            "Unmatched argument shape: '{}'",
            argument
        )))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Entity { name, .. } | Self::Group { name, .. } => name,
        }
    }
}

/// `"dining table "` → `"dining_table"`
pub fn normalize_name(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Parsed `literal-or-_, relation phrase, direction (id)` relate argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelateArgument {
    /// Object name the related entity is filtered by, `None` for `_`
    pub literal: Option<String>,
    pub phrase: String,
    pub direction: Direction,
    /// Raw entity id (may be empty or the placeholder)
    pub entity_id: String,
}

impl RelateArgument {
    pub fn parse(argument: &str) -> Result<Self> {
        let fields: Vec<&str> = argument.split(',').collect();
        let [literal, phrase, target] = fields.as_slice() else {
            return Err(ConversionError::lookup(format!(
                "Relate argument needs 3 comma-separated fields, got {}: '{}'",
                fields.len(),
                argument
            )));
        };

        let (direction, entity_id) = parse_direction(target)?;
        let literal = match literal.trim() {
            "_" => None,
            name => Some(normalize_name(name)),
        };

        Ok(Self {
            literal,
            phrase: phrase.trim().to_string(),
            direction,
            entity_id,
        })
    }

    /// Same argument with another relation phrase (relational `choose`)
    pub fn with_phrase(&self, phrase: &str) -> Self {
        Self {
            phrase: phrase.trim().to_string(),
            ..self.clone()
        }
    }
}

/// `s (12)` → (`Subject`, `"12"`)
pub fn parse_direction(field: &str) -> Result<(Direction, String)> {
    let malformed = || ConversionError::lookup(format!("Malformed direction field: '{}'", field));

    let caps = DIRECTION.captures(field).ok_or_else(malformed)?;
    let direction = Direction::from_marker(&caps[1]).ok_or_else(malformed)?;
    Ok((direction, caps[2].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn entity(name: &str, id: &str) -> ArgumentShape {
        ArgumentShape::Entity {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_explicit_id() {
        assert_eq!(ArgumentShape::classify("chair(0)").unwrap(), entity("chair", "0"));
        assert_eq!(
            ArgumentShape::classify("dining table (1432)").unwrap(),
            entity("dining_table", "1432")
        );
        assert_eq!(
            ArgumentShape::classify("t-shirt (7)").unwrap(),
            entity("t-shirt", "7")
        );
    }

    #[test]
    fn test_placeholder_and_bare() {
        assert_eq!(ArgumentShape::classify("water (-)").unwrap(), entity("water", "-"));
        assert_eq!(ArgumentShape::classify("sky").unwrap(), entity("sky", ""));
        assert_eq!(
            ArgumentShape::classify("traffic light").unwrap(),
            entity("traffic_light", "")
        );
    }

    #[test]
    fn test_group() {
        assert_eq!(
            ArgumentShape::classify("people (12,13,14)").unwrap(),
            ArgumentShape::Group {
                name: "people".to_string(),
                ids: "12,13,14".to_string(),
            }
        );
    }

    #[test]
    fn test_unmatched_shape() {
        let err = ArgumentShape::classify("man's hat").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lookup);
        assert!(ArgumentShape::classify("").is_err());
    }

    #[test]
    fn test_relate_argument() {
        let arg = RelateArgument::parse("_,to the left of,s (1234)").unwrap();
        assert_eq!(arg.literal, None);
        assert_eq!(arg.phrase, "to the left of");
        assert_eq!(arg.direction, Direction::Subject);
        assert_eq!(arg.entity_id, "1234");

        let arg = RelateArgument::parse("coffee table,on,o (-)").unwrap();
        assert_eq!(arg.literal.as_deref(), Some("coffee_table"));
        assert_eq!(arg.direction, Direction::Object);
        assert_eq!(arg.entity_id, "-");
    }

    #[test]
    fn test_direction_tolerates_spacing() {
        assert_eq!(
            parse_direction(" s(1)").unwrap(),
            (Direction::Subject, "1".to_string())
        );
        assert_eq!(
            parse_direction("_ ()").unwrap(),
            (Direction::Unspecified, String::new())
        );
        assert!(parse_direction("x (1)").is_err());
        assert!(parse_direction("s 1").is_err());
    }

    #[test]
    fn test_relate_argument_field_count() {
        let err = RelateArgument::parse("_,on").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lookup);
        assert!(RelateArgument::parse("_,on,s (1),extra").is_err());
    }
}
