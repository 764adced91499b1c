/// Errors that can occur while writing an investigation file
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error opening, writing, flushing or syncing the destination
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The completed temporary file could not be moved over the destination
    #[error("Failed to persist investigation file: {0}")]
    PersistError(#[from] tempfile::PersistError),
}
