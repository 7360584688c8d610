//! Console line parsing

use crate::chat::Decision;
use crate::handlers::BotCommand;

/// What a console line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Shut the bot down
    Stop,
    /// Answer the open confirmation prompt
    Answer(Decision),
    /// Run a chat command
    Command(BotCommand),
    /// Anything else
    Ignored,
}

impl ConsoleInput {
    /// Parse a line typed at the console
    pub fn parse(line: &str, prefix: &str) -> Self {
        let line = line.trim();

        if matches!(line, "stop" | "shutdown" | "quit" | "exit") {
            return ConsoleInput::Stop;
        }

        if let Some(rest) = line.strip_prefix(prefix) {
            match rest.trim() {
                "confirm" => return ConsoleInput::Answer(Decision::Confirm),
                "cancel" => return ConsoleInput::Answer(Decision::Cancel),
                _ => {}
            }
        }

        match BotCommand::parse(line, prefix) {
            Some(command) => ConsoleInput::Command(command),
            None => ConsoleInput::Ignored,
        }
    }
}
