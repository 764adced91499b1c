use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Number of blocks written, section headings included
    pub blocks_written: usize,
    /// Number of rows written
    pub rows_written: usize,
    /// Number of studies written
    pub studies_written: usize,
    /// Number of bytes written
    pub bytes_written: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows in {} blocks ({} studies, {} bytes)",
            self.rows_written, self.blocks_written, self.studies_written, self.bytes_written
        )
    }
}
