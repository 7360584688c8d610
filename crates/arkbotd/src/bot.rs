//! Bot runtime: status monitor plus console chat

use crate::console::{ConsoleChat, run_console};
use crate::monitor::{ChatNotifier, StatusMonitor};
use crate::{BotState, Config};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, BufReader};

pub struct Bot {
    state: Arc<BotState>,
    console: Arc<ConsoleChat>,
}

impl Bot {
    /// Bot talking to the configured server, chatting on stdin/stdout
    pub fn new(config: Config) -> Self {
        let console = Arc::new(ConsoleChat::stdout());
        let state = Arc::new(BotState::new(config, console.clone()));
        Self { state, console }
    }

    /// Bot around prepared state
    ///
    /// `console` receives the `confirm`/`cancel` answers; normally it is also
    /// the chat in `state`.
    pub fn with_state(state: Arc<BotState>, console: Arc<ConsoleChat>) -> Self {
        Self { state, console }
    }

    /// Run until stdin closes, `stop` is typed, or SIGINT/SIGTERM arrives
    pub async fn run(self) -> Result<()> {
        println!("\n=== ARK Bot Console ===");
        println!("Type '{}help' for commands, 'stop' to quit", self.state.command_prefix());
        println!();

        let stdin = BufReader::new(tokio::io::stdin());
        self.run_until(stdin, shutdown_signal()).await
    }

    /// Run with the given console input until it ends or `shutdown` resolves
    pub async fn run_until<R, F>(self, input: R, shutdown: F) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        let notifier = Arc::new(ChatNotifier::new(
            self.state.chat.clone(),
            self.state.channel_id(),
        ));
        let monitor = StatusMonitor::new(
            self.state.readiness.clone(),
            notifier,
            self.state.config.monitor.interval(),
        );
        let (monitor_handle, monitor_task) = monitor.spawn();

        tracing::info!("Bot started");

        tokio::select! {
            result = run_console(self.state.clone(), self.console.clone(), input) => {
                if let Err(e) = result {
                    tracing::error!("Console failed: {:#}", e);
                }
            }
            _ = shutdown => {
                tracing::info!("Shutdown requested");
            }
        }

        tracing::info!("Shutting down...");

        // The monitor must be gone before the chat it posts to is closed
        monitor_handle.stop();
        monitor_handle.cancel();
        match monitor_task.await {
            Ok(monitor) => tracing::debug!(
                "Monitor stopped, last status: {}",
                monitor.last_status().map_or("unknown", |s| s.as_str())
            ),
            Err(e) => tracing::warn!("Monitor task ended abnormally: {}", e),
        }

        self.state
            .chat
            .close()
            .await
            .context("Failed to close chat")?;

        tracing::info!("Bot stopped");
        Ok(())
    }
}

/// Resolve on SIGINT or SIGTERM (Ctrl+C elsewhere)
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => tracing::info!("SIGINT received"),
                    _ = sigterm.recv() => tracing::info!("SIGTERM received"),
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!("Could not install signal handlers: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received"),
            Err(e) => {
                tracing::warn!("Could not install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
}
