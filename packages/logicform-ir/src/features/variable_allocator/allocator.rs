use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{ConversionError, Result};
use crate::shared::models::{VarToken, VARIABLE_ALPHABET};

/// Placeholder id used by the dataset for "some unnamed object"
pub const PLACEHOLDER_ID: &str = "-";

/// Entity identity within one run
///
/// Synthetic ids have their own namespace so a minted id can never alias a
/// dataset id such as `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityId {
    /// Dataset-native id (single id or comma-joined group)
    Explicit(String),
    /// Minted by the run's monotonic counter
    Synthetic(u32),
}

/// Per-run variable table
#[derive(Debug, Default)]
pub struct VariableAllocator {
    table: FxHashMap<EntityId, VarToken>,
    next_synthetic: u32,
}

impl VariableAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for `entity_id`; empty and placeholder ids mint a synthetic entity
    pub fn get_or_create(&mut self, entity_id: &str) -> Result<VarToken> {
        let entity_id = entity_id.trim();
        let id = if entity_id.is_empty() || entity_id == PLACEHOLDER_ID {
            self.mint()
        } else {
            EntityId::Explicit(entity_id.to_string())
        };
        self.resolve(id)
    }

    /// Token for a brand-new synthetic entity
    pub fn fresh(&mut self) -> Result<VarToken> {
        let id = self.mint();
        self.resolve(id)
    }

    /// Number of distinct entities bound so far
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn mint(&mut self) -> EntityId {
        let id = EntityId::Synthetic(self.next_synthetic);
        self.next_synthetic += 1;
        id
    }

    fn resolve(&mut self, id: EntityId) -> Result<VarToken> {
        if let Some(token) = self.table.get(&id) {
            return Ok(*token);
        }

        let token = VarToken::nth(self.table.len()).ok_or_else(|| {
            ConversionError::exhausted(format!(
                "More than {} distinct entities in one run (requested {:?})",
                VARIABLE_ALPHABET.len(),
                id
            ))
        })?;
        debug!("bound {:?} -> {}", id, token);
        self.table.insert(id, token);
        Ok(token)
    }
}
