//! One-shot confirm/cancel prompts
//!
//! A prompt is split in two halves: the [`ConfirmationResponder`] is held by
//! whoever receives user input, the [`PendingConfirmation`] by the command
//! waiting for the answer. The first answer wins; later answers, and answers
//! arriving after the timeout, are refused.

use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

/// Timeout after which an unanswered prompt goes inert
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// User's answer to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}

/// Input side of a prompt
#[derive(Debug)]
pub struct ConfirmationResponder {
    sender: Mutex<Option<oneshot::Sender<Decision>>>,
}

/// Waiting side of a prompt
#[derive(Debug)]
pub struct PendingConfirmation {
    receiver: oneshot::Receiver<Decision>,
    timeout: Duration,
}

/// Create a linked responder/pending pair
pub fn confirmation(timeout: Duration) -> (ConfirmationResponder, PendingConfirmation) {
    let (sender, receiver) = oneshot::channel();
    (
        ConfirmationResponder {
            sender: Mutex::new(Some(sender)),
        },
        PendingConfirmation { receiver, timeout },
    )
}

impl ConfirmationResponder {
    /// Deliver an answer. Returns `false` if the prompt was already answered
    /// or has expired.
    pub fn respond(&self, decision: Decision) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match sender {
            Some(sender) => sender.send(decision).is_ok(),
            None => false,
        }
    }

    /// Whether an answer can still be delivered
    pub fn is_open(&self) -> bool {
        match self.sender.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|s| !s.is_closed()),
            Err(_) => false,
        }
    }
}

impl PendingConfirmation {
    /// Wait for the answer. `None` when the prompt expired or its responder
    /// was dropped.
    pub async fn decision(self) -> Option<Decision> {
        match tokio::time::timeout(self.timeout, self.receiver).await {
            Ok(Ok(decision)) => Some(decision),
            Ok(Err(_)) => None,
            Err(_) => {
                tracing::debug!("Confirmation expired after {:?}", self.timeout);
                None
            }
        }
    }
}
