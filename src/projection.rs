//! The mutable current-state projection built during replay.
//!
//! Two-level structure: entity → attribute → currently-valid values. It is
//! local to one replay pass and discarded after flattening. Empty buckets
//! are pruned on removal, so an entity key exists exactly when the entity
//! still has at least one attribute with at least one value.

use std::collections::HashMap;

use crate::fact::Fact;

/// Current state keyed by (entity, attribute).
///
/// For a cardinality-`one` attribute the value list never grows past one
/// element; for `many` it holds each asserted value in insertion order
/// (duplicates included — assertions are not de-duplicated).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    entities: HashMap<String, HashMap<String, Vec<String>>>,
}

impl Projection {
    /// Creates an empty projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no entity has any current value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities with at least one current value.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if `entity` has any recorded fact.
    #[must_use]
    pub fn contains_entity(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    /// Returns true if `entity` currently has a value for `attribute`.
    #[must_use]
    pub fn has_value(&self, entity: &str, attribute: &str) -> bool {
        self.values(entity, attribute).is_some_and(|v| !v.is_empty())
    }

    /// Current values for (entity, attribute), in insertion order.
    #[must_use]
    pub fn values(&self, entity: &str, attribute: &str) -> Option<&[String]> {
        self.entities
            .get(entity)
            .and_then(|attrs| attrs.get(attribute))
            .map(Vec::as_slice)
    }

    /// Replaces the attribute's collection with a fresh single-element one,
    /// creating the entity's sub-map if it does not exist yet.
    ///
    /// This is both the overwrite rule for cardinality `one` and the
    /// initialization rule for an attribute new to the projection.
    pub fn set_single(
        &mut self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entities
            .entry(entity.into())
            .or_default()
            .insert(attribute.into(), vec![value.into()]);
    }

    /// Appends a value to the attribute's existing collection (the
    /// accumulate rule for cardinality `many`).
    pub fn append(
        &mut self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entities
            .entry(entity.into())
            .or_default()
            .entry(attribute.into())
            .or_default()
            .push(value.into());
    }

    /// Removes an entity and all of its attributes.
    ///
    /// Returns false if the entity was not present.
    pub fn remove_entity(&mut self, entity: &str) -> bool {
        self.entities.remove(entity).is_some()
    }

    /// Removes the first occurrence of `value` from (entity, attribute).
    ///
    /// Returns false if no matching value is currently recorded; the
    /// projection is left unchanged in that case. Emptied attribute and
    /// entity buckets are pruned.
    pub fn remove_value(&mut self, entity: &str, attribute: &str, value: &str) -> bool {
        let Some(attrs) = self.entities.get_mut(entity) else {
            return false;
        };
        let Some(values) = attrs.get_mut(attribute) else {
            return false;
        };
        let Some(pos) = values.iter().position(|v| v == value) else {
            return false;
        };

        values.remove(pos);
        if values.is_empty() {
            attrs.remove(attribute);
            if attrs.is_empty() {
                self.entities.remove(entity);
            }
        }
        true
    }

    /// Flattens the projection into one assertion fact per remaining
    /// (entity, attribute, value) triple. Output order is unspecified.
    #[must_use]
    pub fn flatten(&self) -> Vec<Fact> {
        let mut out = Vec::new();
        for (entity, attrs) in &self.entities {
            for (attribute, values) in attrs {
                for value in values {
                    out.push(Fact::assert(entity.clone(), attribute.clone(), value.clone()));
                }
            }
        }
        out
    }
}
