//! Fact types — the atoms of the log.
//!
//! A fact records that an entity's attribute gained or lost a value.
//! The log is an ordered sequence of facts, oldest to newest; ordering
//! is the sole source of "current" versus "historical".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a fact adds a value or removes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// The value is newly in effect.
    Assert,
    /// The value is no longer in effect.
    Retract,
}

impl Op {
    /// Returns true for [`Op::Assert`].
    #[must_use]
    pub const fn is_assert(&self) -> bool {
        matches!(self, Self::Assert)
    }

    /// Returns true for [`Op::Retract`].
    #[must_use]
    pub const fn is_retract(&self) -> bool {
        matches!(self, Self::Retract)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assert => write!(f, "assert"),
            Self::Retract => write!(f, "retract"),
        }
    }
}

/// A single entry in the fact log.
///
/// # Examples
///
/// ```
/// use factlog::{Fact, Op};
///
/// let added = Fact::assert("joão", "telefone", "234-5678");
/// let removed = Fact::retract("joão", "telefone", "234-5678");
///
/// assert!(added.op.is_assert());
/// assert!(removed.op.is_retract());
/// assert_eq!(added.entity, removed.entity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    /// The entity the fact is about.
    pub entity: String,
    /// The attribute being described.
    pub attribute: String,
    /// The attribute's value.
    pub value: String,
    /// Assertion or retraction.
    pub op: Op,
}

impl Fact {
    /// Creates a fact with an explicit operation.
    #[must_use]
    pub fn new(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        op: Op,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            op,
        }
    }

    /// Creates an assertion fact.
    #[must_use]
    pub fn assert(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(entity, attribute, value, Op::Assert)
    }

    /// Creates a retraction fact.
    #[must_use]
    pub fn retract(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(entity, attribute, value, Op::Retract)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {:?} {}]",
            self.entity, self.attribute, self.value, self.op
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_op() {
        let a = Fact::assert("e", "attr", "v");
        assert_eq!(a.op, Op::Assert);
        assert!(a.op.is_assert());
        assert!(!a.op.is_retract());

        let r = Fact::retract("e", "attr", "v");
        assert_eq!(r.op, Op::Retract);
        assert!(r.op.is_retract());
    }

    #[test]
    fn display_includes_all_fields() {
        let fact = Fact::assert("joão", "endereço", "rua alice, 10");
        let s = format!("{fact}");
        assert!(s.contains("joão"));
        assert!(s.contains("endereço"));
        assert!(s.contains("rua alice, 10"));
        assert!(s.contains("assert"));
    }

    #[test]
    fn op_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Op::Assert).unwrap(), "\"assert\"");
        assert_eq!(serde_json::to_string(&Op::Retract).unwrap(), "\"retract\"");
    }

    #[test]
    fn fact_serialization_round_trip() {
        let fact = Fact::retract("gabriel", "telefone", "98888-1111");
        let json = serde_json::to_string(&fact).unwrap();
        let back: Fact = serde_json::from_str(&json).unwrap();
        assert_eq!(fact, back);
    }
}
