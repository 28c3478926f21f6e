//! Predicate classifiers for relationship-namespace membership.

use crate::model::identifier::Identifier;
use crate::vocab::config::{validate_namespace, VocabularyError};
use crate::vocab::SKOS_NAMESPACE;
use std::convert::Infallible;

/// Decides whether a predicate belongs to the recognized relationship vocabulary.
///
/// Implementations must be total and side-effect free. An `Err` means the
/// classifier itself is broken; callers propagate it without retrying.
///
/// Any `Fn(&Identifier) -> bool` closure is a classifier that cannot fail.
pub trait PredicateClassifier {
    type Error;

    fn classify(&self, predicate: &Identifier) -> Result<bool, Self::Error>;
}

impl<F> PredicateClassifier for F
where
    F: Fn(&Identifier) -> bool,
{
    type Error = Infallible;

    fn classify(&self, predicate: &Identifier) -> Result<bool, Self::Error> {
        Ok(self(predicate))
    }
}

/// Classifies predicates by namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceClassifier {
    namespace: String,
}

impl NamespaceClassifier {
    /// Creates a classifier for `namespace` after validating it.
    ///
    /// # Errors
    /// - `VocabularyError::EmptyValue` when `namespace` is blank.
    /// - `VocabularyError::InvalidNamespace` when it is not an absolute IRI
    ///   ending in `#` or `/`.
    pub fn new(namespace: impl Into<String>) -> Result<Self, VocabularyError> {
        let namespace = namespace.into();
        validate_namespace("relation_namespace", &namespace)?;
        Ok(Self { namespace })
    }

    /// Classifier for the SKOS core namespace.
    pub fn skos() -> Self {
        Self {
            namespace: SKOS_NAMESPACE.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for NamespaceClassifier {
    fn default() -> Self {
        Self::skos()
    }
}

impl PredicateClassifier for NamespaceClassifier {
    type Error = Infallible;

    fn classify(&self, predicate: &Identifier) -> Result<bool, Self::Error> {
        Ok(predicate.in_namespace(&self.namespace))
    }
}
