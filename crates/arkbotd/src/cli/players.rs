//! One-shot player list command

use anyhow::{Result, bail};
use arkcore::CommandExecutor;

pub async fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    super::init_cli_tracing(&config)?;
    let client = super::rcon_client(&config)?;

    let Some(players) = client.list_players().await else {
        bail!("No response from {}", client.address());
    };

    if players.is_empty() {
        println!("No players online");
    } else {
        println!("{} online:", players.len());
        for player in &players {
            println!("  {}", player);
        }
    }

    Ok(())
}
