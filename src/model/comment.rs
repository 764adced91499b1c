use serde::{Deserialize, Serialize};

/// Free-form extension annotation, written as a `Comment[<name>]` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment type name (the part between the brackets)
    pub name: String,

    /// Comment value
    pub value: String,
}

impl Comment {
    /// Create a new comment
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Entities that carry an ordered list of [`Comment`]s
///
/// The comment pivot only needs this view, so any entity list can be pivoted
/// regardless of its concrete type.
pub trait Commentable {
    /// Comments in insertion order
    fn comments(&self) -> &[Comment];

    /// Values of all comments with the given type name, in insertion order
    fn comment_values(&self, name: &str) -> Vec<&str> {
        self.comments()
            .iter()
            .filter(|c| c.name == name)
            .map(|c| c.value.as_str())
            .collect()
    }
}
