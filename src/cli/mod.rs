//! Command-line surface
//!
//! Thin I/O glue over the engine: clap argument parsing, the interactive
//! 8-action menu, prompt helpers, and a one-shot JSON dump. Nothing here
//! terminates the process; `main` decides the exit code.

mod args;
mod commands;
mod errors;
mod io;
mod menu;

pub use args::{Cli, Command};
pub use commands::{dump, run, run_menu};
pub use errors::{CliError, CliResult};
pub use menu::MenuAction;
