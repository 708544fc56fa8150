//! Variable tokens bound by expression nodes

use std::fmt;

/// Fixed token alphabet, issued in this order within one run
pub const VARIABLE_ALPHABET: [&str; 5] = ["$X", "$Y", "$Z", "$E", "$R"];

/// Index into [`VARIABLE_ALPHABET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarToken(u8);

impl VarToken {
    /// Token at `index`, `None` once the alphabet is exhausted
    pub fn nth(index: usize) -> Option<Self> {
        if index < VARIABLE_ALPHABET.len() {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn as_str(&self) -> &'static str {
        VARIABLE_ALPHABET[self.0 as usize]
    }
}

impl fmt::Display for VarToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variable as bound by a node
///
/// `Group` is produced by selecting a comma-joined id list and renders as
/// `list($X)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Entity(VarToken),
    Group(VarToken),
}

impl Variable {
    pub fn token(&self) -> VarToken {
        match self {
            Variable::Entity(t) | Variable::Group(t) => *t,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Variable::Group(_))
    }
}

impl From<VarToken> for Variable {
    fn from(token: VarToken) -> Self {
        Variable::Entity(token)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Entity(t) => write!(f, "{}", t),
            Variable::Group(t) => write!(f, "list({})", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        let rendered: Vec<String> = (0..5)
            .map(|i| VarToken::nth(i).unwrap().to_string())
            .collect();
        assert_eq!(rendered, vec!["$X", "$Y", "$Z", "$E", "$R"]);
        assert!(VarToken::nth(5).is_none());
    }

    #[test]
    fn test_group_rendering() {
        let token = VarToken::nth(1).unwrap();
        assert_eq!(Variable::Group(token).to_string(), "list($Y)");
        assert_eq!(Variable::Entity(token).to_string(), "$Y");
        assert!(Variable::Group(token).is_group());
    }
}
