//! Vocabulary quality analyses over a statement stream.
//!
//! # Responsibility
//! - Enumerate concepts declared in a graph.
//! - Partition concepts into related vs loose ones.
//!
//! # Invariants
//! - Analyses consume each statement source exactly once per call.
//! - Source and classifier errors are returned, never logged or swallowed here.

pub mod concepts;
pub mod loose;
pub mod source;
