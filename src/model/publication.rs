use serde::{Deserialize, Serialize};

use crate::controlled_vocabulary::OntologyAnnotation;

use super::{Comment, Commentable};

/// Author of a publication
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Last name
    pub last_name: String,

    /// First name; only its initial is written
    pub first_name: String,
}

impl Author {
    /// Create a new author
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
        }
    }

    /// Citation form `"Last, F"`, or the bare last name without a first name
    pub fn citation_name(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}, {}", self.last_name, initial),
            None => self.last_name.clone(),
        }
    }
}

/// A publication associated with an investigation or study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// PubMed identifier
    pub pubmed_id: Option<String>,

    /// Digital Object Identifier
    pub doi: Option<String>,

    /// Authors in citation order
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Title
    pub title: Option<String>,

    /// Publication status (e.g. "published", "submitted")
    pub status: Option<OntologyAnnotation>,

    /// Free-form comments
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Publication {
    /// Create a new publication with the given title
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    /// Set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set the PubMed identifier
    pub fn with_pubmed_id(mut self, pubmed_id: impl Into<String>) -> Self {
        self.pubmed_id = Some(pubmed_id.into());
        self
    }

    /// Set the publication status
    pub fn with_status(mut self, status: OntologyAnnotation) -> Self {
        self.status = Some(status);
        self
    }

    /// Append an author
    pub fn add_author(&mut self, author: Author) {
        self.authors.push(author);
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Commentable for Publication {
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
