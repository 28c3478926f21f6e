//! Loose-concept detection.
//!
//! # Responsibility
//! - Find candidate concepts that never appear as subject or object of a
//!   statement whose predicate lies in the relationship vocabulary.
//!
//! # Invariants
//! - The caller's candidate set is never mutated; each pass works on a copy.
//! - The working set only shrinks during a pass.
//! - Statement order does not affect the result.
//! - Errors abort the pass; no partial result is returned.

use crate::analysis::source::StatementSource;
use crate::model::identifier::ConceptSet;
use crate::model::statement::Statement;
use crate::vocab::classifier::PredicateClassifier;
use log::info;
use std::borrow::Borrow;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::ControlFlow;
use std::time::Instant;

/// Failure of a filtering pass.
///
/// `S` is the statement source error, `C` the classifier error.
#[derive(Debug, PartialEq, Eq)]
pub enum FilterError<S, C> {
    /// The statement source failed mid-iteration.
    Source(S),
    /// The predicate classifier failed for some predicate.
    Classifier(C),
}

impl<S: Display, C: Display> Display for FilterError<S, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "statement source failed: {err}"),
            Self::Classifier(err) => write!(f, "predicate classifier failed: {err}"),
        }
    }
}

impl<S, C> Error for FilterError<S, C>
where
    S: Error + 'static,
    C: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Classifier(err) => Some(err),
        }
    }
}

/// Filters a candidate concept set down to its loose members.
///
/// The relation classifier is injected once and reused for every pass.
#[derive(Debug, Clone, Default)]
pub struct LooseConceptFilter<C> {
    classifier: C,
}

impl<C: PredicateClassifier> LooseConceptFilter<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Starts a pass over a private copy of `candidates`.
    ///
    /// Use this directly when statements arrive through callbacks; otherwise
    /// prefer [`Self::filter`], [`Self::try_filter`] or [`Self::filter_source`].
    pub fn start(&self, candidates: &ConceptSet) -> FilterPass<'_, C> {
        info!(
            "event=loose_concepts module=analysis status=start candidates={}",
            candidates.len()
        );
        FilterPass {
            classifier: &self.classifier,
            remaining: candidates.clone(),
            candidate_count: candidates.len(),
            observed: 0,
            started_at: Instant::now(),
        }
    }

    /// Runs one pass over a fallible statement stream.
    ///
    /// # Errors
    /// - `FilterError::Source` on the first `Err` yielded by `statements`.
    /// - `FilterError::Classifier` on the first classifier failure.
    pub fn try_filter<I, T, E>(
        &self,
        statements: I,
        candidates: &ConceptSet,
    ) -> Result<ConceptSet, FilterError<E, C::Error>>
    where
        I: IntoIterator<Item = Result<T, E>>,
        T: Borrow<Statement>,
    {
        let mut pass = self.start(candidates);
        for item in statements {
            let statement = item.map_err(FilterError::Source)?;
            pass.observe(Borrow::<Statement>::borrow(&statement))
                .map_err(FilterError::Classifier)?;
        }
        Ok(pass.finish())
    }

    /// Runs one pass over a callback-driven [`StatementSource`].
    ///
    /// A classifier failure stops the scan early and is returned after the
    /// source hands control back.
    pub fn filter_source<S>(
        &self,
        source: &S,
        candidates: &ConceptSet,
    ) -> Result<ConceptSet, FilterError<S::Error, C::Error>>
    where
        S: StatementSource + ?Sized,
    {
        let mut pass = self.start(candidates);
        let mut classifier_error = None;

        source
            .for_each_statement(&mut |statement: &Statement| match pass.observe(statement) {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    classifier_error = Some(err);
                    ControlFlow::Break(())
                }
            })
            .map_err(FilterError::Source)?;

        if let Some(err) = classifier_error {
            return Err(FilterError::Classifier(err));
        }
        Ok(pass.finish())
    }
}

impl<C> LooseConceptFilter<C>
where
    C: PredicateClassifier<Error = Infallible>,
{
    /// Returns the members of `candidates` with no in-vocabulary relation.
    ///
    /// Never fails: both the statement stream and the classifier are infallible.
    pub fn filter<I>(&self, statements: I, candidates: &ConceptSet) -> ConceptSet
    where
        I: IntoIterator,
        I::Item: Borrow<Statement>,
    {
        let statements = statements.into_iter().map(Ok::<_, Infallible>);
        match self.try_filter(statements, candidates) {
            Ok(loose) => loose,
            Err(FilterError::Source(never)) => match never {},
            Err(FilterError::Classifier(never)) => match never {},
        }
    }
}

/// A running filter pass.
///
/// Consuming the pass with [`FilterPass::finish`] is the only way to obtain
/// the result, so a finished pass cannot observe further statements.
#[derive(Debug)]
pub struct FilterPass<'f, C> {
    classifier: &'f C,
    remaining: ConceptSet,
    candidate_count: usize,
    observed: u64,
    started_at: Instant,
}

impl<C: PredicateClassifier> FilterPass<'_, C> {
    /// Feeds one statement into the pass.
    ///
    /// Removes subject and object from the working set when the predicate
    /// qualifies. Removing an absent concept is a no-op.
    pub fn observe(&mut self, statement: &Statement) -> Result<(), C::Error> {
        self.observed += 1;
        if self.classifier.classify(&statement.predicate)? {
            self.remaining.remove(&statement.subject);
            self.remaining.remove(&statement.object);
        }
        Ok(())
    }

    /// Concepts still loose after the statements observed so far.
    pub fn remaining(&self) -> &ConceptSet {
        &self.remaining
    }

    /// Size of the candidate set the pass started from.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Number of statements observed so far.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Ends the pass and hands the loose concepts to the caller.
    pub fn finish(self) -> ConceptSet {
        info!(
            "event=loose_concepts module=analysis status=ok candidates={} statements={} loose={} duration_ms={}",
            self.candidate_count,
            self.observed,
            self.remaining.len(),
            self.started_at.elapsed().as_millis()
        );
        self.remaining
    }
}
