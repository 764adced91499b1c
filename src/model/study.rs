use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::controlled_vocabulary::OntologyAnnotation;

use super::{Comment, Commentable, Person, Publication};

/// A study within an investigation
///
/// Identifier and file name are fixed at construction: the investigation
/// checks them for uniqueness when the study is added, so they cannot change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    identifier: String,
    file_name: String,
    title: Option<String>,
    description: Option<String>,
    submission_date: Option<NaiveDate>,
    public_release_date: Option<NaiveDate>,
    #[serde(default)]
    design_descriptors: Vec<OntologyAnnotation>,
    #[serde(default)]
    publications: Vec<Publication>,
    #[serde(default)]
    contacts: Vec<Person>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Study {
    /// Create a new study with its identifier and study file name
    pub fn new(identifier: &str, file_name: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            file_name: file_name.to_string(),
            title: None,
            description: None,
            submission_date: None,
            public_release_date: None,
            design_descriptors: Vec::new(),
            publications: Vec::new(),
            contacts: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Study identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Name of the study sample table file (e.g. `s_study.txt`)
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Submission date
    pub fn submission_date(&self) -> Option<NaiveDate> {
        self.submission_date
    }

    /// Set the submission date
    pub fn set_submission_date(&mut self, date: NaiveDate) {
        self.submission_date = Some(date);
    }

    /// Public release date
    pub fn public_release_date(&self) -> Option<NaiveDate> {
        self.public_release_date
    }

    /// Set the public release date
    pub fn set_public_release_date(&mut self, date: NaiveDate) {
        self.public_release_date = Some(date);
    }

    /// Study design descriptors
    pub fn design_descriptors(&self) -> &[OntologyAnnotation] {
        &self.design_descriptors
    }

    /// Append a design descriptor
    pub fn add_design_descriptor(&mut self, descriptor: OntologyAnnotation) {
        self.design_descriptors.push(descriptor);
    }

    /// Publications of this study
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Append a publication
    pub fn add_publication(&mut self, publication: Publication) {
        self.publications.push(publication);
    }

    /// Contacts of this study
    pub fn contacts(&self) -> &[Person] {
        &self.contacts
    }

    /// Append a contact
    pub fn add_contact(&mut self, person: Person) {
        self.contacts.push(person);
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Commentable for Study {
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
