//! Interactive console: the bot's chat surface on stdin/stdout

mod chat;
mod commands;

pub use chat::ConsoleChat;
pub use commands::ConsoleInput;

use crate::handlers::{self, CommandContext};
use crate::state::BotState;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

/// Author recorded for commands typed at the console
pub const CONSOLE_AUTHOR: &str = "console";

/// Read console lines until EOF or `stop`
///
/// Commands run on their own tasks so a pending restart prompt does not
/// block the `confirm`/`cancel` line that answers it. Commands still running
/// when the console exits are aborted.
pub async fn run_console<R>(
    state: Arc<BotState>,
    console: Arc<ConsoleChat>,
    input: R,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut tasks = JoinSet::new();
    let prefix = state.command_prefix().to_string();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::info!("EOF on console input, shutting down");
                break;
            }
            Err(e) => {
                tracing::error!("Error reading console input: {}", e);
                break;
            }
        };

        match ConsoleInput::parse(&line, &prefix) {
            ConsoleInput::Stop => {
                tracing::info!("Stop requested from console");
                break;
            }
            ConsoleInput::Answer(decision) => {
                if !console.answer(decision) {
                    tracing::info!("No open confirmation to {:?}", decision);
                }
            }
            ConsoleInput::Command(command) => {
                let ctx = CommandContext::new(state.channel_id(), CONSOLE_AUTHOR);
                tasks.spawn(handlers::dispatch(command, ctx, state.clone()));
            }
            ConsoleInput::Ignored => {
                if !line.trim().is_empty() {
                    tracing::debug!("Ignoring console line: {}", line.trim());
                }
            }
        }

        // Reap finished commands as we go
        while tasks.try_join_next().is_some() {}
    }

    tasks.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::messages;
    use crate::orchestrator::InfraStatus;
    use crate::testing::{FakeOrchestrator, FakeRcon};
    use tokio::io::{AsyncWriteExt, BufReader, DuplexStream, Lines};

    struct Harness {
        state: Arc<BotState>,
        console: Arc<ConsoleChat>,
        orchestrator: Arc<FakeOrchestrator>,
        output: Lines<BufReader<DuplexStream>>,
    }

    fn harness() -> Harness {
        let (writer, reader) = tokio::io::duplex(4096);
        let console = Arc::new(ConsoleChat::new(writer));
        let orchestrator = Arc::new(FakeOrchestrator::new(InfraStatus::Running));

        let mut config = Config::default();
        config.chat.channel_id = 42;
        let state = Arc::new(BotState::with_collaborators(
            config,
            Arc::new(FakeRcon::replying("ok")),
            orchestrator.clone(),
            console.clone(),
        ));

        Harness {
            state,
            console,
            orchestrator,
            output: BufReader::new(reader).lines(),
        }
    }

    #[tokio::test]
    async fn test_status_then_stop() {
        let mut h = harness();
        let (mut input, input_reader) = tokio::io::duplex(1024);
        let console = tokio::spawn(run_console(
            h.state.clone(),
            h.console.clone(),
            BufReader::new(input_reader),
        ));

        input.write_all(b"hello\n!ark status\n").await.unwrap();
        let line = h.output.next_line().await.unwrap().unwrap();
        assert_eq!(line, format!("[42] {}", messages::STATUS_RUNNING));

        input.write_all(b"stop\n").await.unwrap();
        console.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_restart_confirmed_from_console() {
        let mut h = harness();
        let (mut input, input_reader) = tokio::io::duplex(1024);
        let console = tokio::spawn(run_console(
            h.state.clone(),
            h.console.clone(),
            BufReader::new(input_reader),
        ));

        input.write_all(b"!ark restart\n").await.unwrap();
        let prompt = h.output.next_line().await.unwrap().unwrap();
        assert_eq!(prompt, format!("[42] {}", messages::RESTART_PROMPT));

        input.write_all(b"!ark confirm\n").await.unwrap();
        let reply = h.output.next_line().await.unwrap().unwrap();
        assert_eq!(reply, format!("[42] {}", messages::RESTART_STARTED));
        assert_eq!(h.orchestrator.restarts(), 1);

        drop(input);
        console.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_eof_ends_console() {
        let h = harness();
        let input = BufReader::new(&b"!ark dance\n"[..]);
        run_console(h.state, h.console, input).await.unwrap();
    }
}
