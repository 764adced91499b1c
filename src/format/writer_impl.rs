use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::model::Investigation;

use super::blocks::{Block, BlockComposer};
use super::config::WriterConfig;
use super::error::WriterError;
use super::stats::WriterStats;

/// Character encoding of every investigation file
pub const ENCODING: &str = "UTF-8";

/// Writer emitting investigation files to any `Write` sink
///
/// Blocks are written in file order as they are composed. Call
/// [`finish`](Self::finish) or [`into_inner`](Self::into_inner) to flush;
/// dropping the writer flushes implicitly and any error from that flush is
/// lost.
pub struct InvestigationWriter<W: Write> {
    writer: BufWriter<W>,
    stats: WriterStats,
}

impl InvestigationWriter<File> {
    /// Create a writer to a new file at `path`, truncating an existing one
    pub fn new_file<P: AsRef<Path>>(path: P, config: &WriterConfig) -> Result<Self, WriterError> {
        let file = File::create(path)?;
        Ok(Self::new(file, config))
    }
}

impl<W: Write> InvestigationWriter<W> {
    /// Create a writer to any `Write` implementation
    pub fn new(writer: W, config: &WriterConfig) -> Self {
        Self {
            writer: BufWriter::with_capacity(config.buffer_capacity, writer),
            stats: WriterStats::default(),
        }
    }

    /// Write all blocks of `investigation`
    pub fn write_investigation(&mut self, investigation: &Investigation) -> Result<(), WriterError> {
        debug!(
            "Writing investigation {} ({} studies)",
            investigation.identifier(),
            investigation.studies().len()
        );
        for block in BlockComposer::new(investigation).blocks() {
            self.write_block(&block)?;
        }
        self.stats.studies_written += investigation.studies().len();
        Ok(())
    }

    fn write_block(&mut self, block: &Block) -> Result<(), WriterError> {
        let bytes = block.as_str().as_bytes();
        self.writer.write_all(bytes)?;
        self.stats.blocks_written += 1;
        self.stats.rows_written += block.row_count();
        self.stats.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Statistics so far
    pub fn stats(&self) -> &WriterStats {
        &self.stats
    }

    /// Flush and return the sink together with the statistics
    pub fn into_inner(self) -> Result<(W, WriterStats), WriterError> {
        let inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok((inner, self.stats))
    }

    /// Flush and return the statistics
    pub fn finish(self) -> Result<WriterStats, WriterError> {
        let (mut inner, stats) = self.into_inner()?;
        inner.flush()?;
        Ok(stats)
    }
}

/// Render an investigation file into memory
pub fn to_isatab_string(investigation: &Investigation) -> String {
    BlockComposer::new(investigation)
        .blocks()
        .into_iter()
        .map(Block::into_string)
        .collect()
}

/// Write an investigation file to `path`
///
/// The file is flushed and synced before success is reported. With
/// [`WriterConfig::atomic`] the output is staged in a temporary file next to
/// `path`; on any error the temporary file is removed and an existing file at
/// `path` is left untouched.
pub fn write_investigation_file<P: AsRef<Path>>(
    path: P,
    investigation: &Investigation,
    config: &WriterConfig,
) -> Result<WriterStats, WriterError> {
    let path = path.as_ref();

    let stats = if config.atomic {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut writer = InvestigationWriter::new(staging_file(dir, path)?, config);
        writer.write_investigation(investigation)?;
        let (temp_file, stats) = writer.into_inner()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path)?;
        stats
    } else {
        let mut writer = InvestigationWriter::new_file(path, config)?;
        writer.write_investigation(investigation)?;
        let (file, stats) = writer.into_inner()?;
        file.sync_all()?;
        stats
    };

    info!("{} to {}", stats, path.display());
    Ok(stats)
}

/// Temporary file in `dir` that will replace `path`
///
/// Takes the permissions of an existing file at `path`, otherwise those of a
/// newly created file (`0o666` less the umask on Unix).
fn staging_file(dir: &Path, path: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".i_investigation").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let temp_file = builder.tempfile_in(dir)?;
    if let Ok(metadata) = fs::metadata(path) {
        temp_file.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(temp_file)
}
