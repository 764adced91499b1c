/// Errors that can occur while assembling an investigation
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A study with the same identifier is already part of the investigation
    #[error("Duplicate study identifier: {0}")]
    DuplicateStudyIdentifier(String),

    /// A study with the same file name is already part of the investigation
    #[error("Duplicate study file name: {0}")]
    DuplicateStudyFileName(String),

    /// I/O error reading a model file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
