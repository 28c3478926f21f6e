//! Subject-predicate-object statements.

use crate::model::identifier::Identifier;
use serde::{Deserialize, Serialize};

/// One graph statement.
///
/// Literal and blank-node objects are carried in their lexical form
/// (`"label"@en`, `_:b0`), so they never collide with an IRI token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Identifier,
    pub predicate: Identifier,
    pub object: Identifier,
}

impl Statement {
    pub fn new(
        subject: impl Into<Identifier>,
        predicate: impl Into<Identifier>,
        object: impl Into<Identifier>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
