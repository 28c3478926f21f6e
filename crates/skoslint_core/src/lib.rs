//! Core analyses for SKOS vocabulary quality checks.
//!
//! The central analysis finds loose concepts: declared concepts that take part
//! in no relation from the recognized vocabulary namespace.

pub mod analysis;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod vocab;

pub use analysis::concepts::involved_concepts;
pub use analysis::loose::{FilterError, FilterPass, LooseConceptFilter};
pub use analysis::source::StatementSource;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identifier::{concept_set, ConceptSet, Identifier};
pub use model::statement::Statement;
pub use repo::statement_repo::{
    RepoError, RepoResult, SqliteStatementRepository, StatementRepository,
};
pub use vocab::classifier::{NamespaceClassifier, PredicateClassifier};
pub use vocab::config::{VocabularyConfig, VocabularyError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
