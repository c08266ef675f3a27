//! Schema declarations and the attribute → cardinality index.
//!
//! The schema is consulted on every fact during replay, so it is compiled
//! once into a hash index before the log is walked.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How many values an attribute may hold per entity at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// At most one current value; a new assertion overwrites the old one.
    One,
    /// Any number of simultaneous values; assertions accumulate.
    Many,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Many => write!(f, "many"),
        }
    }
}

/// A single schema row: one attribute and its cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// The attribute this row declares.
    pub attribute: String,
    /// The declared cardinality.
    pub cardinality: Cardinality,
}

impl SchemaEntry {
    /// Creates a schema row.
    #[must_use]
    pub fn new(attribute: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            attribute: attribute.into(),
            cardinality,
        }
    }
}

/// Compiled attribute → cardinality lookup.
///
/// Built once from the schema list and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIndex {
    by_attribute: HashMap<String, Cardinality>,
}

impl SchemaIndex {
    /// Builds the index from schema rows.
    ///
    /// If an attribute appears more than once, the last entry wins: later
    /// rows overwrite earlier ones, so a schema can be patched by appending.
    #[must_use]
    pub fn from_entries(entries: &[SchemaEntry]) -> Self {
        let mut by_attribute = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_attribute.insert(entry.attribute.clone(), entry.cardinality);
        }
        Self { by_attribute }
    }

    /// Looks up the cardinality declared for `attribute`.
    #[must_use]
    pub fn cardinality_of(&self, attribute: &str) -> Option<Cardinality> {
        self.by_attribute.get(attribute).copied()
    }

    /// Returns true if the schema declares `attribute`.
    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.by_attribute.contains_key(attribute)
    }

    /// Number of declared attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_attribute.len()
    }

    /// Returns true if no attributes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_attribute.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lookup_and_len() {
        let index = SchemaIndex::from_entries(&[
            SchemaEntry::new("endereço", Cardinality::One),
            SchemaEntry::new("telefone", Cardinality::Many),
        ]);

        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert_eq!(index.cardinality_of("endereço"), Some(Cardinality::One));
        assert_eq!(index.cardinality_of("telefone"), Some(Cardinality::Many));
        assert_eq!(index.cardinality_of("idade"), None);
        assert!(index.contains("telefone"));
        assert!(!index.contains("idade"));
    }

    #[test]
    fn duplicate_attribute_last_entry_wins() {
        let index = SchemaIndex::from_entries(&[
            SchemaEntry::new("telefone", Cardinality::One),
            SchemaEntry::new("telefone", Cardinality::Many),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.cardinality_of("telefone"), Some(Cardinality::Many));
    }

    #[test]
    fn empty_schema_builds_empty_index() {
        let index = SchemaIndex::from_entries(&[]);
        assert!(index.is_empty());
        assert_eq!(index.cardinality_of("anything"), None);
    }

    #[test]
    fn cardinality_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Cardinality::One).unwrap(), "\"one\"");
        assert_eq!(
            serde_json::to_string(&Cardinality::Many).unwrap(),
            "\"many\""
        );
    }

    #[test]
    fn schema_entry_round_trip() {
        let entry = SchemaEntry::new("endereço", Cardinality::One);
        let json = serde_json::to_string(&entry).unwrap();
        let back: SchemaEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
