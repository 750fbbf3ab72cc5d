//! CLI module for roomstay
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server
//! - token: mint an access token

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run_command, serve, token};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
