//! Bot serve command

use anyhow::Result;
use arkbotd::Bot;
use arkbotd::logging::init_tracing;

pub async fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    init_tracing(&config.logging)?;
    config.validate()?;

    tracing::info!("Starting arkbotd");
    tracing::info!("RCON: {}:{}", config.rcon.host, config.rcon.port);
    tracing::info!(
        "Deployment: {}/{}",
        config.orchestrator.namespace,
        config.orchestrator.deployment
    );
    tracing::info!("Status check every {:?}", config.monitor.interval());

    let bot = Bot::new(config);
    bot.run().await?;

    Ok(())
}
