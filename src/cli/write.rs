use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use isatab::format::{write_investigation_file, InvestigationWriter, WriterStats};
use isatab::model::Investigation;

use super::config::Config;

/// Write an investigation file from a JSON model
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    stdout: bool,
    no_atomic: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = match config_path {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let mut writer_config = config.writer_config();
    if no_atomic {
        writer_config.atomic = false;
    }

    let investigation = Investigation::from_json_file(&input)
        .with_context(|| format!("Failed to load investigation model: {}", input.display()))?;

    info!("Input:  {}", input.display());
    info!(
        "Investigation {}: {} studies",
        investigation.identifier(),
        investigation.studies().len()
    );

    if stdout {
        let handle = std::io::stdout().lock();
        let mut writer = InvestigationWriter::new(handle, &writer_config);
        writer
            .write_investigation(&investigation)
            .context("Failed to write investigation file")?;
        let (mut handle, _) = writer.into_inner()?;
        handle.flush()?;
        return Ok(());
    }

    let output = output.unwrap_or_else(|| input.with_file_name(config.file_name()));
    info!("Output: {}", output.display());

    let stats = write_investigation_file(&output, &investigation, &writer_config)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_summary(&output, &stats);
    Ok(())
}

pub(super) fn print_summary(output: &std::path::Path, stats: &WriterStats) {
    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        println!("{} {}", style("✓").green().bold(), style(output.display()).bold());
        println!("  {}", style(stats).dim());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", output.display());
        println!("  {}", stats);
    }
}
