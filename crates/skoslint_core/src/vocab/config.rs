//! Vocabulary configuration for concept enumeration and relation classification.
//!
//! # Responsibility
//! - Hold the namespace and class IRIs that drive loose-concept analysis.
//! - Validate configured values before analysis starts.
//!
//! # Invariants
//! - Defaults describe plain SKOS.
//! - A validated `relation_namespace` is an absolute IRI ending in `#` or `/`.

use crate::vocab::classifier::NamespaceClassifier;
use crate::vocab::{SKOS_CONCEPT, SKOS_NAMESPACE};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAMESPACE_IRI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>"{}|\\^`]*[#/]$"#)
        .expect("valid namespace regex")
});
static ABSOLUTE_IRI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>"{}|\\^`]+$"#)
        .expect("valid iri regex")
});

/// Vocabulary configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    EmptyValue { field: &'static str },
    InvalidNamespace { field: &'static str, value: String },
    InvalidIri { field: &'static str, value: String },
}

impl Display for VocabularyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue { field } => write!(f, "{field} must not be empty"),
            Self::InvalidNamespace { field, value } => write!(
                f,
                "{field} must be an absolute IRI ending in `#` or `/`, got `{value}`"
            ),
            Self::InvalidIri { field, value } => {
                write!(f, "{field} must be an absolute IRI, got `{value}`")
            }
        }
    }
}

impl Error for VocabularyError {}

/// Configuration for which vocabulary counts as "relations" and which class
/// marks a concept.
///
/// Missing fields fall back to SKOS when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Predicates starting with this namespace protect a concept from being loose.
    pub relation_namespace: String,
    /// Class IRI used with `rdf:type` to enumerate concepts.
    pub concept_type: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            relation_namespace: SKOS_NAMESPACE.to_string(),
            concept_type: SKOS_CONCEPT.to_string(),
        }
    }
}

impl VocabularyConfig {
    /// Validates all configured IRIs.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        validate_namespace("relation_namespace", &self.relation_namespace)?;
        validate_iri("concept_type", &self.concept_type)
    }

    /// Builds the relation classifier described by this configuration.
    pub fn classifier(&self) -> Result<NamespaceClassifier, VocabularyError> {
        NamespaceClassifier::new(self.relation_namespace.clone())
    }
}

pub(crate) fn validate_namespace(field: &'static str, value: &str) -> Result<(), VocabularyError> {
    if value.trim().is_empty() {
        return Err(VocabularyError::EmptyValue { field });
    }
    if !NAMESPACE_IRI_RE.is_match(value) {
        return Err(VocabularyError::InvalidNamespace {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn validate_iri(field: &'static str, value: &str) -> Result<(), VocabularyError> {
    if value.trim().is_empty() {
        return Err(VocabularyError::EmptyValue { field });
    }
    if !ABSOLUTE_IRI_RE.is_match(value) {
        return Err(VocabularyError::InvalidIri {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{VocabularyConfig, VocabularyError};
    use crate::vocab::{SKOS_CONCEPT, SKOS_NAMESPACE};

    #[test]
    fn default_config_is_skos_and_valid() {
        let config = VocabularyConfig::default();
        assert_eq!(config.relation_namespace, SKOS_NAMESPACE);
        assert_eq!(config.concept_type, SKOS_CONCEPT);
        config.validate().expect("default config should validate");
    }

    #[test]
    fn deserialize_fills_missing_fields_with_skos_defaults() {
        let config: VocabularyConfig = serde_json::from_value(serde_json::json!({
            "relation_namespace": "http://example.org/rel#"
        }))
        .expect("partial config should decode");

        assert_eq!(config.relation_namespace, "http://example.org/rel#");
        assert_eq!(config.concept_type, SKOS_CONCEPT);
        assert_eq!(
            config.classifier().expect("classifier").namespace(),
            "http://example.org/rel#"
        );
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = VocabularyConfig {
            relation_namespace: "http://example.org/rel".to_string(),
            ..VocabularyConfig::default()
        };
        let err = config.validate().expect_err("namespace without terminator must fail");
        assert!(err.to_string().contains("ending in `#` or `/`"));

        let config = VocabularyConfig {
            concept_type: "Concept".to_string(),
            ..VocabularyConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(VocabularyError::InvalidIri {
                field: "concept_type",
                value: "Concept".to_string(),
            })
        );

        let config = VocabularyConfig {
            concept_type: String::new(),
            ..VocabularyConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(VocabularyError::EmptyValue {
                field: "concept_type"
            })
        );
    }
}
