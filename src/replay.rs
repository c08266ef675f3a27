//! Log replay — deriving current state from the fact log.
//!
//! [`compute_current_facts`] walks the log oldest to newest, applying each
//! fact to a [`Projection`] under the cardinality rules from the schema,
//! then flattens the projection into the set of currently-valid facts.
//!
//! The pass is single-threaded and deterministic. Nothing is shared or
//! retained between invocations, so independent calls may run concurrently.

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, ReplayError};
use crate::fact::{Fact, Op};
use crate::projection::Projection;
use crate::schema::{Cardinality, SchemaEntry, SchemaIndex};

/// Result frame of a replay: the currently-valid facts together with any
/// per-fact anomalies observed along the way.
///
/// Replay is best-effort: a malformed retraction never invalidates the
/// whole state rebuild. The offending fact is skipped and recorded here as
/// a [`Diagnostic`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentFacts {
    /// Currently-valid facts, all assertions. Order is unspecified.
    pub facts: Vec<Fact>,
    /// Anomalies observed during replay, in log order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CurrentFacts {
    /// Returns true if replay produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of currently-valid facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if no fact is currently in effect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Returns true if the given triple is currently in effect.
    #[must_use]
    pub fn contains(&self, entity: &str, attribute: &str, value: &str) -> bool {
        self.facts
            .iter()
            .any(|f| f.entity == entity && f.attribute == attribute && f.value == value)
    }
}

/// Replays `facts` (ordered oldest to newest) against `schema` and returns
/// the facts currently in effect.
///
/// If either input is empty the result is empty and no replay is attempted.
/// Every attribute referenced by the log must be declared in the schema;
/// the first undeclared attribute aborts with
/// [`ReplayError::UnknownAttribute`] before any fact is applied.
///
/// Retraction anomalies (unknown entity, value not found) do not abort:
/// the fact is skipped and reported in [`CurrentFacts::diagnostics`].
///
/// # Errors
///
/// Returns [`ReplayError::UnknownAttribute`] if a fact references an
/// attribute absent from the schema.
///
/// # Examples
///
/// ```
/// use factlog::{compute_current_facts, Cardinality, Fact, SchemaEntry};
///
/// let facts = vec![
///     Fact::assert("joão", "endereço", "rua alice, 10"),
///     Fact::assert("joão", "endereço", "rua bob, 88"),
/// ];
/// let schema = vec![SchemaEntry::new("endereço", Cardinality::One)];
///
/// let current = compute_current_facts(&facts, &schema)?;
/// assert_eq!(current.len(), 1);
/// assert!(current.contains("joão", "endereço", "rua bob, 88"));
/// # Ok::<(), factlog::ReplayError>(())
/// ```
pub fn compute_current_facts(
    facts: &[Fact],
    schema: &[SchemaEntry],
) -> Result<CurrentFacts, ReplayError> {
    if facts.is_empty() || schema.is_empty() {
        return Ok(CurrentFacts::default());
    }

    let index = SchemaIndex::from_entries(schema);

    // Validate attribute coverage up front so a late unknown attribute
    // cannot leave the caller with a half-applied projection.
    let mut cardinalities = Vec::with_capacity(facts.len());
    for fact in facts {
        let Some(cardinality) = index.cardinality_of(&fact.attribute) else {
            return Err(ReplayError::UnknownAttribute {
                attribute: fact.attribute.clone(),
            });
        };
        cardinalities.push(cardinality);
    }

    let mut projection = Projection::new();
    let mut diagnostics = Vec::new();

    for (pos, (fact, cardinality)) in facts.iter().zip(cardinalities).enumerate() {
        match fact.op {
            Op::Assert => apply_assert(&mut projection, fact, cardinality),
            Op::Retract => {
                apply_retract(&mut projection, fact, cardinality, pos, &mut diagnostics);
            }
        }
    }

    Ok(CurrentFacts {
        facts: projection.flatten(),
        diagnostics,
    })
}

fn apply_assert(projection: &mut Projection, fact: &Fact, cardinality: Cardinality) {
    // Accumulate only when the attribute already holds a value and is
    // declared `many`; every other assertion starts a fresh one-element
    // collection (first fact for a new entity, first value for a new
    // attribute, or the overwrite rule for `one`).
    if cardinality == Cardinality::Many && projection.has_value(&fact.entity, &fact.attribute) {
        projection.append(fact.entity.as_str(), fact.attribute.as_str(), fact.value.as_str());
    } else {
        projection.set_single(fact.entity.as_str(), fact.attribute.as_str(), fact.value.as_str());
    }
}

fn apply_retract(
    projection: &mut Projection,
    fact: &Fact,
    cardinality: Cardinality,
    pos: usize,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !projection.contains_entity(&fact.entity) {
        diagnostics.push(Diagnostic::RetractFromUnknownEntity {
            index: pos,
            entity: fact.entity.clone(),
            attribute: fact.attribute.clone(),
            value: fact.value.clone(),
        });
        return;
    }

    match cardinality {
        // Retracting a single-valued attribute drops the entire entity,
        // other attributes included. Deliberately kept from the reference
        // behavior; see DESIGN.md.
        Cardinality::One => {
            projection.remove_entity(&fact.entity);
        }
        Cardinality::Many => {
            if !projection.remove_value(&fact.entity, &fact.attribute, &fact.value) {
                diagnostics.push(Diagnostic::RetractValueNotFound {
                    index: pos,
                    entity: fact.entity.clone(),
                    attribute: fact.attribute.clone(),
                    value: fact.value.clone(),
                });
            }
        }
    }
}
