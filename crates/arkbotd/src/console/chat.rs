//! Chat platform backed by a line console

use crate::chat::{ChatPlatform, ConfirmationResponder, Decision, PendingConfirmation, confirmation};
use anyhow::{Result, bail};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

type Output = Box<dyn AsyncWrite + Send + Unpin>;

/// Prints messages as `[channel] text` lines and keeps at most one open
/// confirmation prompt
pub struct ConsoleChat {
    output: tokio::sync::Mutex<Output>,
    prompt: Mutex<Option<ConfirmationResponder>>,
    closed: AtomicBool,
}

impl ConsoleChat {
    pub fn new(output: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        Self {
            output: tokio::sync::Mutex::new(Box::new(output)),
            prompt: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }

    /// Answer the open prompt. Returns `false` if there is none, or it
    /// expired.
    pub fn answer(&self, decision: Decision) -> bool {
        let responder = self
            .prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match responder {
            Some(responder) => responder.respond(decision),
            None => false,
        }
    }

    async fn write_line(&self, channel_id: u64, text: &str) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            bail!("Console chat is closed");
        }

        let mut output = self.output.lock().await;
        output
            .write_all(format!("[{}] {}\n", channel_id, text).as_bytes())
            .await?;
        output.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ChatPlatform for ConsoleChat {
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<()> {
        self.write_line(channel_id, text).await
    }

    async fn request_confirmation(
        &self,
        channel_id: u64,
        prompt: &str,
        timeout: Duration,
    ) -> Result<PendingConfirmation> {
        let (responder, pending) = confirmation(timeout);
        let replaced = self
            .prompt
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(responder);
        if replaced.is_some_and(|old| old.is_open()) {
            tracing::debug!("Replacing an unanswered confirmation prompt");
        }

        self.write_line(channel_id, prompt).await?;
        Ok(pending)
    }

    async fn close(&self) -> Result<()> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.output.lock().await.shutdown().await?;
        }
        Ok(())
    }
}
