//! Controlled-vocabulary terms and predicate classification.
//!
//! # Responsibility
//! - Name the SKOS/RDF terms used by analysis.
//! - Provide injectable predicate classifiers (no global namespace singleton).
//!
//! # Invariants
//! - Classifiers are pure: the answer for a predicate never depends on call order.

pub mod classifier;
pub mod config;

/// SKOS core namespace.
pub const SKOS_NAMESPACE: &str = "http://www.w3.org/2004/02/skos/core#";
/// `skos:Concept` class IRI.
pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
/// `rdf:type` predicate IRI.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
