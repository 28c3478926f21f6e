//! Opaque graph identifiers.
//!
//! # Responsibility
//! - Wrap IRI tokens (and lexical literal / blank-node tokens) in one type.
//! - Allow hash-set lookups by plain `&str`.
//!
//! # Invariants
//! - The wrapped token is never rewritten after construction.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Hash-based set of concept identifiers.
pub type ConceptSet = HashSet<Identifier>;

/// Immutable identifier token for a graph node or predicate.
///
/// Equality is exact token equality, so `http://a#x` and `http://a#x/` are
/// different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the token starts with `namespace`.
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.0.starts_with(namespace)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Builds a [`ConceptSet`] from any iterator of identifier-like values.
pub fn concept_set<I, T>(values: I) -> ConceptSet
where
    I: IntoIterator<Item = T>,
    T: Into<Identifier>,
{
    values.into_iter().map(Into::into).collect()
}
