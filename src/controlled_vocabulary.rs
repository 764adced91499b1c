//! # Ontology Annotations
//!
//! Controlled vocabulary terms as they appear in an investigation file: a
//! term, its accession number and the ontology it comes from. Annotations are
//! used for study design descriptors, contact roles and publication status,
//! and are written as three merged rows (`<Attribute>`,
//! `<Attribute> Term Accession Number`, `<Attribute> Term Source REF`).
//!
//! ## Reference
//! - ISA-Tab specification: https://isa-specs.readthedocs.io/en/latest/isatab.html
//! - CRediT taxonomy: https://credit.niso.org/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::model::{Comment, Commentable, Ontology};

/// A term from a controlled vocabulary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyAnnotation {
    /// Term name (e.g., "data curation role")
    pub term: String,

    /// Term accession number (often a URI)
    pub term_accession: Option<String>,

    /// Ontology the term comes from
    pub term_source: Option<Arc<Ontology>>,

    /// Free-form comments
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl OntologyAnnotation {
    /// Create a bare term without accession or source
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            ..Default::default()
        }
    }

    /// Add the term accession number
    pub fn with_accession(mut self, accession: impl Into<String>) -> Self {
        self.term_accession = Some(accession.into());
        self
    }

    /// Add the term source
    pub fn with_source(mut self, source: &Arc<Ontology>) -> Self {
        self.term_source = Some(Arc::clone(source));
        self
    }

    /// Name of the term source, if any
    pub fn source_name(&self) -> Option<&str> {
        self.term_source.as_deref().map(|o| o.name.as_str())
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Commentable for OntologyAnnotation {
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

impl fmt::Display for OntologyAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.term_accession, self.source_name()) {
            (Some(acc), Some(src)) => write!(f, "[{}: {} ({})]", src, self.term, acc),
            (Some(acc), None) => write!(f, "[{} ({})]", self.term, acc),
            (None, Some(src)) => write!(f, "[{}: {}]", src, self.term),
            (None, None) => write!(f, "[{}]", self.term),
        }
    }
}

/// CRediT contributor role terms
pub mod credit_roles {
    use super::{Arc, Ontology, OntologyAnnotation};

    const PREFIX: &str = "http://purl.org/credit/ontology#";

    /// The CRediT ontology source reference
    pub fn ontology() -> Ontology {
        Ontology::new("CRediT", PREFIX)
            .with_description("CASRAI Contributor Roles Taxonomy (CRediT)")
    }

    fn role(source: &Arc<Ontology>, term: &str, id: &str) -> OntologyAnnotation {
        OntologyAnnotation::new(term)
            .with_accession(format!("{}{}", PREFIX, id))
            .with_source(source)
    }

    /// CREDIT_00000002 - data curation role
    pub fn data_curation(source: &Arc<Ontology>) -> OntologyAnnotation {
        role(source, "data curation role", "CREDIT_00000002")
    }

    /// CREDIT_00000007 - project administration role
    pub fn project_administration(source: &Arc<Ontology>) -> OntologyAnnotation {
        role(source, "project administration role", "CREDIT_00000007")
    }
}

/// Publication status terms
pub mod publication_status {
    use super::OntologyAnnotation;

    /// "published"
    pub fn published() -> OntologyAnnotation {
        OntologyAnnotation::new("published")
    }

    /// "submitted"
    pub fn submitted() -> OntologyAnnotation {
        OntologyAnnotation::new("submitted")
    }

    /// "in preparation"
    pub fn in_preparation() -> OntologyAnnotation {
        OntologyAnnotation::new("in preparation")
    }
}
