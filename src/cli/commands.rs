//! CLI command implementations
//!
//! `serve` boots the tokio runtime and runs the HTTP server; `token`
//! is a one-shot utility for minting access tokens against the
//! configured secret.

use std::path::Path;

use uuid::Uuid;

use crate::auth::JwtManager;
use crate::config::ServerConfig;
use crate::rest::{MemoryRoomService, RestServer};

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
        Command::Token { config, user } => token(&config, user),
    }
}

/// Load configuration, falling back to defaults when the file does
/// not exist
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if path.exists() {
        Ok(ServerConfig::load(path)?)
    } else {
        Ok(ServerConfig::default())
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let service = MemoryRoomService::new();
    let server = RestServer::new(service, config.jwt_config());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve(&config))?;

    Ok(())
}

/// Mint and print an access token
pub fn token(config_path: &Path, user: Option<Uuid>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let manager = JwtManager::new(config.jwt_config());

    let user_id = user.unwrap_or_else(Uuid::new_v4);
    let token = manager.generate_access_token(user_id)?;

    println!("{}", token);
    Ok(())
}
