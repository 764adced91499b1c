//! # isatab
//!
//! Command-line tool for writing ISA-Tab investigation files.
//!
//! ## Usage
//!
//! ```bash
//! # Write an investigation file from a JSON model
//! isatab write investigation.json i_investigation.txt
//!
//! # Write the sample investigation
//! isatab demo i_investigation.txt
//!
//! # Summarize a JSON model
//! isatab info investigation.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
