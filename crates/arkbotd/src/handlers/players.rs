//! `players` command

use super::CommandContext;
use crate::messages;
use crate::state::BotState;
use anyhow::Result;
use std::sync::Arc;

/// List the players currently online
///
/// An unreachable console is reported separately from an empty server.
pub async fn handle_players(ctx: &CommandContext, state: Arc<BotState>) -> Result<()> {
    let timeout = state.config.monitor.rcon_timeout();
    let players = tokio::time::timeout(timeout, state.rcon.list_players())
        .await
        .ok()
        .flatten();

    let text = match players {
        Some(players) => {
            tracing::info!("{} players online", players.len());
            messages::players_text(&players)
        }
        None => {
            tracing::warn!("Player list requested by {} but RCON did not answer", ctx.author);
            messages::PLAYERS_UNREACHABLE.to_string()
        }
    };

    state.chat.send_message(ctx.channel_id, &text).await
}
