//! `status` command

use super::CommandContext;
use crate::messages;
use crate::state::BotState;
use anyhow::Result;
use std::sync::Arc;

/// Report the composed server status
pub async fn handle_status(ctx: &CommandContext, state: Arc<BotState>) -> Result<()> {
    let status = state.readiness.get_status().await;
    tracing::debug!("Status for {}: {}", ctx.author, status);

    state
        .chat
        .send_message(ctx.channel_id, &messages::status_text(status))
        .await
}
