//! `help` command

use super::CommandContext;
use crate::messages;
use crate::state::BotState;
use anyhow::Result;
use std::sync::Arc;

pub async fn handle_help(ctx: &CommandContext, state: Arc<BotState>) -> Result<()> {
    let text = messages::help_text(state.command_prefix());
    state.chat.send_message(ctx.channel_id, &text).await
}
