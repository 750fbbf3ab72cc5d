//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits
//! non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Server failed to bind or serve
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Token generation failed
    #[error("Token error: {0}")]
    Token(#[from] crate::auth::AuthError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
