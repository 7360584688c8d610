//! Bot initialization command

use anyhow::{Context, Result};
use arkbotd::Config;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub async fn run(config_path: &str, non_interactive: bool) -> Result<()> {
    println!("Initializing arkbotd...\n");

    if Path::new(config_path).exists() {
        println!("Error: Configuration file already exists: {}", config_path);
        println!("Remove it first or use a different path.");
        return Ok(());
    }

    let mut config = Config::default();

    if !non_interactive {
        config.rcon.host = prompt_line("RCON host", &config.rcon.host)?;
        config.rcon.port = prompt_line("RCON port", &config.rcon.port.to_string())?
            .parse()
            .context("Invalid RCON port")?;
        config.rcon.password =
            rpassword::prompt_password("RCON password: ").context("Failed to read password")?;
        config.chat.channel_id = prompt_line("Chat channel id", "0")?
            .parse()
            .context("Invalid channel id")?;
    }

    if let Some(parent) = config.logging.file.as_ref().and_then(|f| f.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    config.save(config_path)?;
    println!("✓ Configuration created: {}", config_path);

    if let Err(e) = config.validate() {
        println!();
        println!("Note: {}", e);
        println!("Edit {} or set the matching environment variable before serving.", config_path);
    }

    println!();
    println!("To start the bot:");
    println!("  arkbotd serve");

    Ok(())
}

/// Ask for a value, keeping `default` on an empty answer
fn prompt_line(label: &str, default: &str) -> Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim();

    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}
