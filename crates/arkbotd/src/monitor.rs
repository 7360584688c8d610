//! Background status monitoring
//!
//! The monitor polls a [`StatusSource`] every `check_interval` and hands
//! every *change* of status to a [`Notifier`]. The last observed status is
//! the only state it keeps, and it never leaves the monitor's own task.

use crate::chat::ChatPlatform;
use crate::messages;
use anyhow::Result;
use arkcore::ServerStatus;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Anything that can report the current server status
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn current_status(&self) -> Result<ServerStatus>;
}

/// Receives status transitions
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, previous: Option<ServerStatus>, current: ServerStatus) -> Result<()>;
}

/// Announcement for a transition, if it deserves one
pub fn notification_message(
    previous: Option<ServerStatus>,
    current: ServerStatus,
) -> Option<&'static str> {
    if previous == Some(current) {
        return None;
    }

    match (previous, current) {
        (_, ServerStatus::Running) => Some(messages::NOTIFY_READY),
        (Some(ServerStatus::NotReady), ServerStatus::Starting) => Some(messages::NOTIFY_STARTING),
        (Some(ServerStatus::Running), ServerStatus::NotReady | ServerStatus::Starting) => {
            Some(messages::NOTIFY_RESTARTING)
        }
        (_, ServerStatus::Error) => Some(messages::NOTIFY_ERROR),
        _ => None,
    }
}

/// Posts transition announcements to a chat channel
pub struct ChatNotifier {
    chat: Arc<dyn ChatPlatform>,
    channel_id: u64,
}

impl ChatNotifier {
    pub fn new(chat: Arc<dyn ChatPlatform>, channel_id: u64) -> Self {
        Self { chat, channel_id }
    }
}

#[async_trait]
impl Notifier for ChatNotifier {
    async fn notify(&self, previous: Option<ServerStatus>, current: ServerStatus) -> Result<()> {
        let Some(message) = notification_message(previous, current) else {
            return Ok(());
        };

        self.chat.send_message(self.channel_id, message).await?;
        tracing::info!("Sent status notification: {}", message);
        Ok(())
    }
}

/// Control handle for a running monitor
#[derive(Debug, Clone)]
pub struct MonitorHandle {
    active: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl MonitorHandle {
    /// Ask the loop to exit at its next iteration boundary
    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Abort the loop now, even mid-check or mid-sleep
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_monitoring(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

pub struct StatusMonitor {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    check_interval: Duration,
    last_status: Option<ServerStatus>,
    active: Arc<AtomicBool>,
    cancel: CancellationToken,
}

impl StatusMonitor {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        check_interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            check_interval,
            last_status: None,
            active: Arc::new(AtomicBool::new(false)),
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token, e.g. a process-wide one
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn handle(&self) -> MonitorHandle {
        MonitorHandle {
            active: self.active.clone(),
            cancel: self.cancel.clone(),
        }
    }

    pub fn last_status(&self) -> Option<ServerStatus> {
        self.last_status
    }

    pub fn is_monitoring(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run the monitor on its own task
    pub fn spawn(mut self) -> (MonitorHandle, JoinHandle<StatusMonitor>) {
        let handle = self.handle();
        // Mark active before the task is scheduled so an early stop() sticks
        self.active.store(true, Ordering::SeqCst);
        let task = tokio::spawn(async move {
            self.run().await;
            self
        });
        (handle, task)
    }

    /// Start monitoring and loop until stopped or cancelled
    pub async fn start(&mut self) {
        self.active.store(true, Ordering::SeqCst);
        self.run().await;
    }

    async fn run(&mut self) {
        let cancel = self.cancel.clone();
        tracing::info!(
            "Starting server status monitoring (every {:?})",
            self.check_interval
        );

        while self.active.load(Ordering::SeqCst) {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                result = self.check_status() => {
                    if let Err(e) = result {
                        tracing::error!("Error checking server status: {:#}", e);
                    }
                }
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.check_interval) => {}
            }
        }

        self.active.store(false, Ordering::SeqCst);
        tracing::info!("Server status monitoring stopped");
    }

    /// Poll once and notify if the status changed
    pub async fn check_status(&mut self) -> Result<()> {
        let current = self.source.current_status().await?;

        if self.last_status != Some(current) {
            let previous = self.last_status;
            tracing::info!(
                "Server status changed: {} -> {}",
                previous.map_or("unknown", ServerStatus::as_str),
                current
            );

            if let Err(e) = self.notifier.notify(previous, current).await {
                tracing::error!("Error sending status notification: {:#}", e);
            }
            self.last_status = Some(current);
        }

        Ok(())
    }
}
