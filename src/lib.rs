//! # factlog — current-state resolution over an EAV fact log
//!
//! factlog replays an append-only, chronologically ordered log of
//! entity–attribute–value assertions and retractions against a schema of
//! per-attribute cardinalities, and returns the facts currently in effect.
//!
//! ## Core Concepts
//!
//! - **Fact**: an (entity, attribute, value, assert/retract) log entry
//! - **Cardinality**: whether an attribute holds one value (`one`) or many
//!   simultaneous values (`many`) per entity
//! - **Replay**: walking the log oldest to newest, overwriting `one`
//!   attributes, accumulating `many` attributes, and applying retractions
//! - **CurrentFacts**: the result frame — current facts plus any per-fact
//!   diagnostics collected along the way
//!
//! ## Usage
//!
//! ```
//! use factlog::{compute_current_facts, Cardinality, Fact, SchemaEntry};
//!
//! let facts = vec![
//!     Fact::assert("joão", "telefone", "234-5678"),
//!     Fact::assert("joão", "telefone", "91234-5555"),
//!     Fact::retract("joão", "telefone", "234-5678"),
//! ];
//! let schema = vec![SchemaEntry::new("telefone", Cardinality::Many)];
//!
//! let current = compute_current_facts(&facts, &schema)?;
//! assert_eq!(current.len(), 1);
//! assert!(current.contains("joão", "telefone", "91234-5555"));
//! # Ok::<(), factlog::ReplayError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fact;
pub mod projection;
pub mod replay;
pub mod schema;

// Re-export primary types at crate root for convenience
pub use error::{Diagnostic, ReplayError};
pub use fact::{Fact, Op};
pub use projection::Projection;
pub use replay::{compute_current_facts, CurrentFacts};
pub use schema::{Cardinality, SchemaEntry, SchemaIndex};
