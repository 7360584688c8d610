//! One-shot status command

use anyhow::Result;
use arkbotd::ReadinessChecker;
use arkbotd::messages::status_text;
use arkbotd::orchestrator::KubectlOrchestrator;
use std::sync::Arc;

pub async fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    super::init_cli_tracing(&config)?;

    let checker = ReadinessChecker::new(
        Arc::new(KubectlOrchestrator::new(&config.orchestrator)),
        Arc::new(super::rcon_client(&config)?),
    )
    .with_rcon_timeout(config.monitor.rcon_timeout());

    let status = checker.get_status().await;
    println!("{}", status);
    println!("{}", status_text(status));

    Ok(())
}
