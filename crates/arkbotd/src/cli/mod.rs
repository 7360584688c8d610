//! Command-line subcommands

pub mod exec;
pub mod info;
pub mod init;
pub mod players;
pub mod serve;
pub mod status;

use anyhow::{Context, Result};
use arkbotd::Config;
use arkbotd::config::LoggingConfig;
use arkbotd::logging::init_tracing;
use arkcore::RconClient;

/// Config file (if present) with environment overrides applied
fn load_config(path: &str) -> Result<Config> {
    let mut config = Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path))?;
    config.apply_env()?;
    Ok(config)
}

/// Console-only logging for one-shot commands
fn init_cli_tracing(config: &Config) -> Result<()> {
    init_tracing(&LoggingConfig {
        file: None,
        ..config.logging.clone()
    })
}

/// RCON client for one-shot commands; only the password is required
fn rcon_client(config: &Config) -> Result<RconClient> {
    if config.rcon.password.is_empty() {
        anyhow::bail!("RCON password is not configured (set rcon.password or RCON_PASSWORD)");
    }
    Ok(RconClient::new(
        config.rcon.host.clone(),
        config.rcon.port,
        config.rcon.password.clone(),
    ))
}
