//! Repository layer over the statement store.
//!
//! # Responsibility
//! - Define statement persistence contracts.
//! - Isolate SQLite query details from analysis.
//!
//! # Invariants
//! - Repository writes reject statements with empty identifiers.
//! - Reads surface storage errors instead of skipping rows.

pub mod statement_repo;
