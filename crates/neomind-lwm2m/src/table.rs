//! Bidirectional key/code table used by the dictionary.

use std::collections::HashMap;

use crate::error::{Lwm2mError, Result};
use crate::identifier::{Identifier, IdentifierEntry};

#[derive(Debug, Clone, Default)]
pub(crate) struct EnumTable {
    by_key: HashMap<String, u32>,
    by_value: HashMap<u32, String>,
}

impl EnumTable {
    pub(crate) fn from_pairs(pairs: &[(&str, u32)]) -> Self {
        let mut table = Self::default();
        for (key, value) in pairs {
            table.by_key.insert((*key).to_string(), *value);
            table.by_value.insert(*value, (*key).to_string());
        }
        table
    }

    /// Add an entry. Re-adding an identical pair is a no-op; a key or value
    /// already bound to something else is a conflict.
    pub(crate) fn insert(&mut self, key: &str, value: u32) -> Result<()> {
        if let Some(existing) = self.by_key.get(key) {
            if *existing == value {
                return Ok(());
            }
            return Err(Lwm2mError::Conflict(format!(
                "key '{}' is already bound to {}",
                key, existing
            )));
        }
        if let Some(existing) = self.by_value.get(&value) {
            return Err(Lwm2mError::Conflict(format!(
                "value {} is already bound to '{}'",
                value, existing
            )));
        }
        self.by_key.insert(key.to_string(), value);
        self.by_value.insert(value, key.to_string());
        Ok(())
    }

    pub(crate) fn get(&self, id: &Identifier) -> Option<IdentifierEntry> {
        match id {
            Identifier::Numeric(n) => self.by_value(*n),
            Identifier::Key(key) => match self.by_key.get(key) {
                Some(value) => Some(IdentifierEntry::new(key.as_str(), *value)),
                None => id.as_number().and_then(|n| self.by_value(n)),
            },
        }
    }

    fn by_value(&self, value: u32) -> Option<IdentifierEntry> {
        self.by_value
            .get(&value)
            .map(|key| IdentifierEntry::new(key.as_str(), value))
    }

    pub(crate) fn len(&self) -> usize {
        self.by_key.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnumTable {
        EnumTable::from_pairs(&[("device", 3), ("location", 6)])
    }

    #[test]
    fn test_get_by_key_and_value() {
        let table = sample();
        assert_eq!(
            table.get(&Identifier::from("device")),
            Some(IdentifierEntry::new("device", 3))
        );
        assert_eq!(
            table.get(&Identifier::from(6)),
            Some(IdentifierEntry::new("location", 6))
        );
        assert_eq!(
            table.get(&Identifier::from("6")),
            Some(IdentifierEntry::new("location", 6))
        );
        assert_eq!(table.get(&Identifier::from("nothing")), None);
        assert_eq!(table.get(&Identifier::from(42)), None);
    }

    #[test]
    fn test_insert_conflicts() {
        let mut table = sample();
        assert!(table.insert("device", 3).is_ok());
        assert!(matches!(table.insert("device", 4), Err(Lwm2mError::Conflict(_))));
        assert!(matches!(table.insert("gadget", 6), Err(Lwm2mError::Conflict(_))));
        assert!(table.insert("gadget", 7).is_ok());
        assert_eq!(table.len(), 3);
    }
}
