//! ARK Server Bot Daemon (arkbotd)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "arkbotd")]
#[command(about = "ARK server management bot", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "arkbotd.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a configuration file (first-time setup)
    Init {
        /// Skip interactive prompts
        #[arg(long)]
        non_interactive: bool,
    },

    /// Run the bot: status monitor plus console commands
    Serve,

    /// Print the current server status once
    Status,

    /// List online players
    Players,

    /// Run a raw RCON command
    Exec {
        /// Command text, e.g. `saveworld`
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },

    /// Show configuration summary
    Info,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { non_interactive } => cli::init::run(&cli.config, non_interactive).await,
        Commands::Serve => cli::serve::run(&cli.config).await,
        Commands::Status => cli::status::run(&cli.config).await,
        Commands::Players => cli::players::run(&cli.config).await,
        Commands::Exec { command } => cli::exec::run(&cli.config, &command.join(" ")).await,
        Commands::Info => cli::info::run(&cli.config).await,
        Commands::Version => {
            println!("arkbotd version {}", env!("CARGO_PKG_VERSION"));
            println!("RCON max packet size: {} bytes", arkcore::protocol::MAX_PACKET_SIZE);
            Ok(())
        }
    }
}
