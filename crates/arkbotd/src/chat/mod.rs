//! Chat platform collaborator

pub mod confirmation;

pub use confirmation::{
    CONFIRMATION_TIMEOUT, ConfirmationResponder, Decision, PendingConfirmation, confirmation,
};

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where commands come from and messages go to
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Deliver a text message to a channel
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<()>;

    /// Show a confirm/cancel prompt that expires after `timeout`
    async fn request_confirmation(
        &self,
        channel_id: u64,
        prompt: &str,
        timeout: Duration,
    ) -> Result<PendingConfirmation>;

    /// Disconnect from the platform
    async fn close(&self) -> Result<()>;
}
