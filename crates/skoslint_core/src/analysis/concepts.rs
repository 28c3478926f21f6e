//! Concept enumeration.
//!
//! Collects every subject typed with the configured concept class
//! (`skos:Concept` by default). The result is the candidate set for
//! [`crate::analysis::loose::LooseConceptFilter`].

use crate::analysis::source::StatementSource;
use crate::model::identifier::ConceptSet;
use crate::model::statement::Statement;
use crate::vocab::config::VocabularyConfig;
use crate::vocab::RDF_TYPE;
use log::info;
use std::ops::ControlFlow;

/// Returns all subjects `s` with a statement `(s, rdf:type, concept_type)`.
///
/// # Errors
/// Source read failures are returned unchanged.
pub fn involved_concepts<S>(
    source: &S,
    vocabulary: &VocabularyConfig,
) -> Result<ConceptSet, S::Error>
where
    S: StatementSource + ?Sized,
{
    let mut concepts = ConceptSet::new();
    source.for_each_statement(&mut |statement: &Statement| {
        if statement.predicate.as_str() == RDF_TYPE
            && statement.object.as_str() == vocabulary.concept_type
        {
            concepts.insert(statement.subject.clone());
        }
        ControlFlow::Continue(())
    })?;

    info!(
        "event=involved_concepts module=analysis status=ok concepts={}",
        concepts.len()
    );
    Ok(concepts)
}
