//! `restart` command
//!
//! A restart only happens after an explicit confirmation. The prompt expires
//! after [`CONFIRMATION_TIMEOUT`]; an expired prompt does nothing.

use super::CommandContext;
use crate::chat::{CONFIRMATION_TIMEOUT, Decision};
use crate::messages;
use crate::state::BotState;
use anyhow::{Context, Result};
use std::sync::Arc;

pub async fn handle_restart(ctx: &CommandContext, state: Arc<BotState>) -> Result<()> {
    tracing::info!("Server restart requested by {}", ctx.author);

    let pending = state
        .chat
        .request_confirmation(ctx.channel_id, messages::RESTART_PROMPT, CONFIRMATION_TIMEOUT)
        .await
        .context("Failed to ask for restart confirmation")?;

    match pending.decision().await {
        Some(Decision::Confirm) => {
            tracing::info!("Server restart confirmed by {}", ctx.author);
            let text = if state.orchestrator.restart_server().await {
                messages::RESTART_STARTED
            } else {
                messages::RESTART_FAILED
            };
            state.chat.send_message(ctx.channel_id, text).await
        }
        Some(Decision::Cancel) => {
            tracing::info!("Server restart cancelled by {}", ctx.author);
            state
                .chat
                .send_message(ctx.channel_id, messages::RESTART_CANCELLED)
                .await
        }
        None => {
            tracing::debug!("Restart confirmation for {} expired", ctx.author);
            Ok(())
        }
    }
}
