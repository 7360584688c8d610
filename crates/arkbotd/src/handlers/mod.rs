//! Chat command handlers

pub mod help;
pub mod players;
pub mod restart;
pub mod status;

use crate::messages;
use crate::state::BotState;
use std::sync::Arc;

/// Commands understood after the command prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Status,
    Players,
    Restart,
    Help,
}

impl BotCommand {
    /// Parse a chat line such as `!ark status`
    ///
    /// Lines without the prefix and unknown commands yield `None`, and are
    /// meant to be ignored.
    pub fn parse(input: &str, prefix: &str) -> Option<Self> {
        let rest = input.trim().strip_prefix(prefix)?;
        let mut parts = rest.split_whitespace();

        let command = match parts.next()? {
            "status" => BotCommand::Status,
            "players" => BotCommand::Players,
            "restart" => BotCommand::Restart,
            "help" => BotCommand::Help,
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(command)
    }

    pub fn name(self) -> &'static str {
        match self {
            BotCommand::Status => "status",
            BotCommand::Players => "players",
            BotCommand::Restart => "restart",
            BotCommand::Help => "help",
        }
    }
}

/// Who issued a command, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub channel_id: u64,
    pub author: String,
}

impl CommandContext {
    pub fn new(channel_id: u64, author: impl Into<String>) -> Self {
        Self {
            channel_id,
            author: author.into(),
        }
    }
}

/// Run a command and report faults to the channel as a short message
pub async fn dispatch(command: BotCommand, ctx: CommandContext, state: Arc<BotState>) {
    tracing::info!(
        "Command '{}' requested by {} in channel {}",
        command.name(),
        ctx.author,
        ctx.channel_id
    );

    let result = match command {
        BotCommand::Status => status::handle_status(&ctx, state.clone()).await,
        BotCommand::Players => players::handle_players(&ctx, state.clone()).await,
        BotCommand::Restart => restart::handle_restart(&ctx, state.clone()).await,
        BotCommand::Help => help::handle_help(&ctx, state.clone()).await,
    };

    if let Err(e) = result {
        tracing::error!("Command '{}' failed: {:#}", command.name(), e);
        if let Err(e) = state
            .chat
            .send_message(ctx.channel_id, messages::GENERIC_FAILURE)
            .await
        {
            tracing::warn!("Could not report command failure: {:#}", e);
        }
    }
}
