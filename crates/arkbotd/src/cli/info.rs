//! Configuration summary

use anyhow::Result;

pub async fn run(config_path: &str) -> Result<()> {
    let config = super::load_config(config_path)?;

    println!("Bot Configuration");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("RCON:         {}:{}", config.rcon.host, config.rcon.port);
    println!(
        "Password:     {}",
        if config.rcon.password.is_empty() { "(not set)" } else { "(set)" }
    );
    println!();
    println!("Namespace:    {}", config.orchestrator.namespace);
    println!("Deployment:   {}", config.orchestrator.deployment);
    println!("kubectl:      {}", config.orchestrator.kubectl);
    println!();
    println!("Channel:      {}", config.chat.channel_id);
    println!("Prefix:       {:?}", config.chat.command_prefix);
    println!("Check every:  {}s", config.monitor.interval_seconds);
    println!("RCON timeout: {}s", config.monitor.rcon_timeout_seconds);
    println!();
    println!("Log level:    {}", config.logging.level);
    match &config.logging.file {
        Some(file) => println!("Log file:     {}", file.display()),
        None => println!("Log file:     (none)"),
    }

    match config.validate() {
        Ok(()) => println!("\n✓ Ready to serve"),
        Err(e) => println!("\n✗ {}", e),
    }

    Ok(())
}
