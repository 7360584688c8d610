//! Raw RCON command

use anyhow::{Result, bail};
use arkcore::CommandExecutor;

pub async fn run(config_path: &str, command: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    super::init_cli_tracing(&config)?;
    let client = super::rcon_client(&config)?;

    match client
        .execute_with_timeout(command, config.monitor.rcon_timeout())
        .await
    {
        Some(reply) if reply.is_empty() => println!("(empty response)"),
        Some(reply) => println!("{}", reply),
        None => bail!("No response from {}", client.address()),
    }

    Ok(())
}
