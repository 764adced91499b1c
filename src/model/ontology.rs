use serde::{Deserialize, Serialize};

/// Ontology source reference (a `Term Source` of the investigation)
///
/// Annotations point at an ontology through a shared
/// [`Arc<Ontology>`](std::sync::Arc); only its name is written next to the
/// annotated term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    /// Source name, used as `Term Source REF` by annotations
    pub name: String,

    /// URL or file the ontology is published at
    pub url: Option<String>,

    /// Ontology version
    pub version: Option<String>,

    /// Human-readable description
    pub description: Option<String>,
}

impl Ontology {
    /// Create a new ontology reference with the given name and URL
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
