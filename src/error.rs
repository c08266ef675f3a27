//! Error and diagnostic types.
//!
//! All failure conditions are strongly typed with thiserror. Fatal input
//! errors abort the computation; per-fact anomalies become [`Diagnostic`]
//! values collected alongside the result instead of aborting the replay.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal input errors raised by [`compute_current_facts`].
///
/// [`compute_current_facts`]: crate::replay::compute_current_facts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// A fact references an attribute the schema does not declare.
    ///
    /// Raised before replay begins; no default cardinality is assumed.
    #[error("attribute '{attribute}' is not declared in the schema")]
    UnknownAttribute {
        /// The undeclared attribute.
        attribute: String,
    },
}

/// A recoverable per-fact anomaly observed during replay.
///
/// The offending fact is skipped and replay continues; the diagnostic is
/// collected into the result frame so callers can detect it programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A retraction referenced an entity with no recorded facts.
    #[error("fact #{index}: cannot retract from unknown entity '{entity}'")]
    RetractFromUnknownEntity {
        /// Zero-based position of the offending fact in the log.
        index: usize,
        /// The unknown entity.
        entity: String,
        /// The attribute named by the retraction.
        attribute: String,
        /// The value named by the retraction.
        value: String,
    },

    /// A many-cardinality retraction named a value that is not currently
    /// recorded for its (entity, attribute).
    #[error("fact #{index}: value {value:?} not found for '{entity}'/'{attribute}'")]
    RetractValueNotFound {
        /// Zero-based position of the offending fact in the log.
        index: usize,
        /// The entity named by the retraction.
        entity: String,
        /// The attribute named by the retraction.
        attribute: String,
        /// The value that was not found.
        value: String,
    },
}

impl Diagnostic {
    /// Zero-based position of the offending fact in the input log.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::RetractFromUnknownEntity { index, .. }
            | Self::RetractValueNotFound { index, .. } => *index,
        }
    }

    /// The entity the offending fact referenced.
    #[must_use]
    pub fn entity(&self) -> &str {
        match self {
            Self::RetractFromUnknownEntity { entity, .. }
            | Self::RetractValueNotFound { entity, .. } => entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attribute_message_names_attribute() {
        let err = ReplayError::UnknownAttribute {
            attribute: "idade".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("idade"));
        assert!(msg.contains("not declared"));
    }

    #[test]
    fn diagnostic_messages_carry_fact_position() {
        let d = Diagnostic::RetractFromUnknownEntity {
            index: 3,
            entity: "maria".to_string(),
            attribute: "telefone".to_string(),
            value: "555".to_string(),
        };
        let msg = format!("{d}");
        assert!(msg.contains("#3"));
        assert!(msg.contains("maria"));
        assert_eq!(d.index(), 3);
        assert_eq!(d.entity(), "maria");
    }

    #[test]
    fn value_not_found_message_names_value() {
        let d = Diagnostic::RetractValueNotFound {
            index: 0,
            entity: "joão".to_string(),
            attribute: "telefone".to_string(),
            value: "999".to_string(),
        };
        let msg = format!("{d}");
        assert!(msg.contains("999"));
        assert!(msg.contains("telefone"));
    }

    #[test]
    fn diagnostic_serialization_is_tagged() {
        let d = Diagnostic::RetractValueNotFound {
            index: 1,
            entity: "e".to_string(),
            attribute: "a".to_string(),
            value: "v".to_string(),
        };
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"kind\":\"retract_value_not_found\""));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
