use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod info;
mod write;

/// isatab - ISA-Tab investigation file writer
#[derive(Parser)]
#[command(name = "isatab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an investigation file from a JSON investigation model
    Write {
        /// Input JSON model path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output investigation file (defaults to i_investigation.txt next to the input)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the investigation file to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Write directly into the output file instead of staging a temp file
        #[arg(long)]
        no_atomic: bool,
    },

    /// Write the drought stress sample investigation
    Demo {
        /// Output investigation file
        #[arg(value_name = "OUTPUT", default_value = "i_investigation.txt")]
        output: PathBuf,

        /// Also dump the JSON model to this path
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },

    /// Summarize a JSON investigation model
    Info {
        /// Input JSON model path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Write {
            input,
            output,
            config,
            stdout,
            no_atomic,
        } => write::run(input, output, config, stdout, no_atomic),
        Commands::Demo { output, json } => demo::run(output, json),
        Commands::Info { file } => info::run(file),
    }
}
