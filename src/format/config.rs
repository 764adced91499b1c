/// Configuration for the investigation writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Write files through a temporary file in the destination directory and
    /// move it into place only once everything is flushed. A failed write then
    /// never leaves a truncated investigation file behind.
    pub atomic: bool,

    /// Capacity of the output buffer in bytes
    pub buffer_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_capacity: 64 * 1024,
        }
    }
}

impl WriterConfig {
    /// Write directly into the destination file
    pub fn direct() -> Self {
        Self {
            atomic: false,
            ..Default::default()
        }
    }
}
