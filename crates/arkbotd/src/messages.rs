//! User-facing message texts

use arkcore::ServerStatus;

pub const NOTIFY_READY: &str = "🟢 **ARK server is ready for connections!** 🦕";
pub const NOTIFY_STARTING: &str = "🟡 ARK server pods are running, game server is starting...";
pub const NOTIFY_RESTARTING: &str = "🟡 ARK server is restarting or not ready...";
pub const NOTIFY_ERROR: &str = "🔴 **ARK server reported an error!** Please check the logs.";

pub const STATUS_RUNNING: &str = "🟢 **Server is running** and ready for connections";
pub const STATUS_STARTING: &str = "🟡 **Server is starting**: pods are up, game server is still loading";
pub const STATUS_NOT_READY: &str = "🟠 **Server is not ready**: pods are starting or restarting";
pub const STATUS_ERROR: &str = "🔴 **Server error**: the deployment could not be read";

pub const PLAYERS_NONE: &str = "👥 No players are currently online";
pub const PLAYERS_UNREACHABLE: &str = "❌ Could not reach the server to list players";

pub const RESTART_PROMPT: &str =
    "⚠️ Are you sure you want to restart the ARK server? Reply `confirm` or `cancel` within 60 seconds.";
pub const RESTART_STARTED: &str =
    "🔄 **Server restart initiated!** The server will be back shortly.";
pub const RESTART_FAILED: &str = "❌ Failed to restart the server. Please check the logs.";
pub const RESTART_CANCELLED: &str = "✋ Server restart cancelled";

pub const GENERIC_FAILURE: &str = "❌ Something went wrong while running that command";

/// Display text for a server status
pub fn status_text(status: ServerStatus) -> String {
    match status {
        ServerStatus::Running => STATUS_RUNNING.to_string(),
        ServerStatus::Starting => STATUS_STARTING.to_string(),
        ServerStatus::NotReady => STATUS_NOT_READY.to_string(),
        ServerStatus::Error => STATUS_ERROR.to_string(),
        other => format!("❓ Unknown server status: {}", other),
    }
}

/// Display text for a list of online players
pub fn players_text(players: &[String]) -> String {
    if players.is_empty() {
        return PLAYERS_NONE.to_string();
    }

    let noun = if players.len() == 1 { "player" } else { "players" };
    let mut text = format!("👥 **{} {} online:**", players.len(), noun);
    for player in players {
        text.push_str("\n• ");
        text.push_str(player);
    }
    text
}

/// Command overview
pub fn help_text(prefix: &str) -> String {
    let prefix = prefix.trim_end();
    format!(
        "🦕 **ARK server commands**\n\
         `{prefix} status`: show server status\n\
         `{prefix} players`: list online players\n\
         `{prefix} restart`: restart the server (asks for confirmation)\n\
         `{prefix} help`: show this message"
    )
}
