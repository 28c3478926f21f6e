//! Graph data model shared by analysis and storage.
//!
//! # Responsibility
//! - Define the identifier and statement shapes consumed by the analysis core.
//! - Keep identity semantics exact: no IRI normalization happens in core.
//!
//! # Invariants
//! - Two identifiers are equal iff their tokens are byte-equal.
//! - Statements are read-only inputs to analysis.

pub mod identifier;
pub mod statement;
