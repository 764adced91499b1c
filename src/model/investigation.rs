use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::{Comment, Commentable, ModelError, Ontology, Person, Publication, Study};

/// Root of the ISA metadata model
///
/// Lists are append-only and exposed as slices. Studies go through
/// [`add_study`](Self::add_study), which keeps identifiers and file names
/// unique among siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InvestigationRecord")]
pub struct Investigation {
    identifier: String,
    title: Option<String>,
    description: Option<String>,
    submission_date: Option<NaiveDate>,
    public_release_date: Option<NaiveDate>,
    ontologies: Vec<Arc<Ontology>>,
    publications: Vec<Publication>,
    contacts: Vec<Person>,
    studies: Vec<Study>,
    comments: Vec<Comment>,
}

/// Unvalidated wire shape of an [`Investigation`]
#[derive(Deserialize)]
struct InvestigationRecord {
    identifier: String,
    title: Option<String>,
    description: Option<String>,
    submission_date: Option<NaiveDate>,
    public_release_date: Option<NaiveDate>,
    #[serde(default)]
    ontologies: Vec<Arc<Ontology>>,
    #[serde(default)]
    publications: Vec<Publication>,
    #[serde(default)]
    contacts: Vec<Person>,
    #[serde(default)]
    studies: Vec<Study>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl TryFrom<InvestigationRecord> for Investigation {
    type Error = ModelError;

    fn try_from(record: InvestigationRecord) -> Result<Self, Self::Error> {
        let mut investigation = Investigation {
            identifier: record.identifier,
            title: record.title,
            description: record.description,
            submission_date: record.submission_date,
            public_release_date: record.public_release_date,
            ontologies: record.ontologies,
            publications: record.publications,
            contacts: record.contacts,
            studies: Vec::with_capacity(record.studies.len()),
            comments: record.comments,
        };
        for study in record.studies {
            investigation.add_study(study)?;
        }
        Ok(investigation)
    }
}

impl Investigation {
    /// Create a new, empty investigation
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: None,
            description: None,
            submission_date: None,
            public_release_date: None,
            ontologies: Vec::new(),
            publications: Vec::new(),
            contacts: Vec::new(),
            studies: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Investigation identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Description of the aims of the investigation
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

    /// Ontology source references
    pub fn ontologies(&self) -> &[Arc<Ontology>] {
        &self.ontologies
    }

    /// Append an ontology source reference
    ///
    /// Returns the shared handle so annotations can point at the same source.
    pub fn add_ontology(&mut self, ontology: Ontology) -> Arc<Ontology> {
        let ontology = Arc::new(ontology);
        self.ontologies.push(Arc::clone(&ontology));
        ontology
    }

    /// Publications
    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Append a publication
    pub fn add_publication(&mut self, publication: Publication) {
        self.publications.push(publication);
    }

    /// Contacts
    pub fn contacts(&self) -> &[Person] {
        &self.contacts
    }

    /// Append a contact
    pub fn add_contact(&mut self, person: Person) {
        self.contacts.push(person);
    }

    /// Studies in insertion order
    pub fn studies(&self) -> &[Study] {
        &self.studies
    }

    /// Look up a study by identifier
    pub fn study(&self, identifier: &str) -> Option<&Study> {
        self.studies.iter().find(|s| s.identifier() == identifier)
    }

    /// Append a study if its identifier and file name are both unused
    ///
    /// On a collision the study list is left untouched and the error names
    /// which of the two collided (identifier is checked first).
    pub fn add_study(&mut self, study: Study) -> Result<(), ModelError> {
        if self
            .studies
            .iter()
            .any(|s| s.identifier() == study.identifier())
        {
            warn!(
                "Investigation {} already has a study with identifier {}",
                self.identifier,
                study.identifier()
            );
            return Err(ModelError::DuplicateStudyIdentifier(
                study.identifier().to_string(),
            ));
        }
        if self
            .studies
            .iter()
            .any(|s| s.file_name() == study.file_name())
        {
            warn!(
                "Investigation {} already has a study with file name {}",
                self.identifier,
                study.file_name()
            );
            return Err(ModelError::DuplicateStudyFileName(
                study.file_name().to_string(),
            ));
        }
        self.studies.push(study);
        Ok(())
    }

    /// Append a comment
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Serialize the model to JSON
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize the model from JSON, re-validating study uniqueness
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the model from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl Commentable for Investigation {
    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
