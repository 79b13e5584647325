//! CLI argument definitions using clap
//!
//! Commands:
//! - repodb menu [--file <path>]
//! - repodb dump --file <path>
//!
//! No subcommand runs the menu without a preload.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repodb - repository metadata records behind a text menu
#[derive(Parser, Debug)]
#[command(name = "repodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu
    Menu {
        /// Data file to load before the first prompt
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Load a data file and print its records as JSON
    Dump {
        /// Data file to read
        #[arg(long)]
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
