//! CLI argument definitions using clap
//!
//! Commands:
//! - roomstay serve --config <path>
//! - roomstay token --config <path> [--user <uuid>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// roomstay - A small room-listing REST service
#[derive(Parser, Debug)]
#[command(name = "roomstay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./roomstay.json")]
        config: PathBuf,
    },

    /// Mint an access token for a user and print it
    Token {
        /// Path to configuration file
        #[arg(long, default_value = "./roomstay.json")]
        config: PathBuf,

        /// User ID the token identifies (random if omitted)
        #[arg(long)]
        user: Option<Uuid>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
