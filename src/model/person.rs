use serde::{Deserialize, Serialize};

use crate::controlled_vocabulary::OntologyAnnotation;

use super::{Comment, Commentable};

/// A contact person of an investigation or study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Last name
    pub last_name: Option<String>,

    /// First name
    pub first_name: Option<String>,

    /// Middle initials
    pub mid_initials: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Fax number
    pub fax: Option<String>,

    /// Postal address
    pub address: Option<String>,

    /// Institutional affiliation
    pub affiliation: Option<String>,

    /// Roles, ideally annotated with an ontology term (e.g. CRediT)
    #[serde(default)]
    pub roles: Vec<OntologyAnnotation>,

    /// Free-form comments (e.g. `Person ID` with an ORCID)
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Person {
    /// Create a new person with the given last and first name
    pub fn new(last_name: &str, first_name: &str) -> Self {
        Self {
            last_name: Some(last_name.to_string()),
            first_name: Some(first_name.to_string()),
            ..Default::default()
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    /// Append a role
    pub fn add_role(&mut self, role: OntologyAnnotation) {
        self.roles.push(role);
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Commentable for Person {
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
