use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename numbered folders to "<prefix> <number>" and log what changed.
///
/// Run without a subcommand for the interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "renumber")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show more diagnostics on stderr. Repeat for more detail.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the numbered folders in a directory and write antes-e-depois.txt
    Run {
        /// Directory whose immediate subfolders are renamed
        directory: PathBuf,

        /// Text placed before each number (used verbatim)
        #[arg(allow_hyphen_values = true)]
        prefix: String,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show what `run` would do without renaming anything
    Plan {
        /// Directory whose immediate subfolders would be renamed
        directory: PathBuf,

        /// Text placed before each number (used verbatim)
        #[arg(allow_hyphen_values = true)]
        prefix: String,

        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
