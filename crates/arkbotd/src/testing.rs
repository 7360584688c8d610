//! In-memory collaborators for unit tests

use crate::Config;
use crate::chat::{ChatPlatform, ConfirmationResponder, Decision, PendingConfirmation, confirmation};
use crate::orchestrator::{InfraStatus, Orchestrator};
use crate::state::BotState;
use anyhow::{Result, bail};
use arkcore::client::CommandExecutor;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) struct FakeOrchestrator {
    status: Mutex<InfraStatus>,
    restart_accepted: bool,
    restarts: AtomicUsize,
    checks: AtomicUsize,
}

impl FakeOrchestrator {
    pub(crate) fn new(status: InfraStatus) -> Self {
        Self {
            status: Mutex::new(status),
            restart_accepted: true,
            restarts: AtomicUsize::new(0),
            checks: AtomicUsize::new(0),
        }
    }

    pub(crate) fn rejecting_restarts(mut self) -> Self {
        self.restart_accepted = false;
        self
    }

    pub(crate) fn restarts(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }

    /// Number of status queries answered so far
    pub(crate) fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Orchestrator for FakeOrchestrator {
    async fn get_server_status(&self) -> InfraStatus {
        self.checks.fetch_add(1, Ordering::SeqCst);
        *self.status.lock().unwrap()
    }

    async fn restart_server(&self) -> bool {
        self.restarts.fetch_add(1, Ordering::SeqCst);
        self.restart_accepted
    }
}

pub(crate) struct FakeRcon {
    reply: Mutex<Option<String>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    commands: Mutex<Vec<String>>,
}

impl FakeRcon {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: Mutex::new(Some(reply.to_string())),
            delay: None,
            calls: AtomicUsize::new(0),
            commands: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            reply: Mutex::new(None),
            ..Self::replying("")
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn set_reply(&self, reply: Option<&str>) {
        *self.reply.lock().unwrap() = reply.map(str::to_string);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for FakeRcon {
    async fn execute(&self, command: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.commands.lock().unwrap().push(command.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingChat {
    messages: Mutex<Vec<(u64, String)>>,
    prompts: Mutex<Vec<String>>,
    responder: Mutex<Option<ConfirmationResponder>>,
    fail_sends: AtomicBool,
    fail_prompts: AtomicBool,
    closed: AtomicBool,
    sends_after_close: AtomicUsize,
}

impl RecordingChat {
    pub(crate) fn failing() -> Self {
        let chat = Self::default();
        chat.fail_sends.store(true, Ordering::SeqCst);
        chat
    }

    pub(crate) fn refusing_prompts() -> Self {
        let chat = Self::default();
        chat.fail_prompts.store(true, Ordering::SeqCst);
        chat
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub(crate) fn channels(&self) -> Vec<u64> {
        self.messages.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Messages attempted after `close`; these are refused
    pub(crate) fn sends_after_close(&self) -> usize {
        self.sends_after_close.load(Ordering::SeqCst)
    }

    /// Wait until a prompt is shown, then answer it
    pub(crate) async fn answer(&self, decision: Decision) -> bool {
        loop {
            if let Some(responder) = self.responder.lock().unwrap().as_ref() {
                return responder.respond(decision);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[async_trait]
impl ChatPlatform for RecordingChat {
    async fn send_message(&self, channel_id: u64, text: &str) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            self.sends_after_close.fetch_add(1, Ordering::SeqCst);
            bail!("chat is closed");
        }
        if self.fail_sends.load(Ordering::SeqCst) {
            bail!("chat connection lost");
        }
        self.messages
            .lock()
            .unwrap()
            .push((channel_id, text.to_string()));
        Ok(())
    }

    async fn request_confirmation(
        &self,
        _channel_id: u64,
        prompt: &str,
        timeout: Duration,
    ) -> Result<PendingConfirmation> {
        if self.fail_prompts.load(Ordering::SeqCst) {
            bail!("cannot post prompt");
        }
        let (responder, pending) = confirmation(timeout);
        self.prompts.lock().unwrap().push(prompt.to_string());
        *self.responder.lock().unwrap() = Some(responder);
        Ok(pending)
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Bot state around fakes, with channel 42 configured
pub(crate) fn bot_state(
    rcon: Arc<FakeRcon>,
    orchestrator: Arc<FakeOrchestrator>,
    chat: Arc<RecordingChat>,
) -> Arc<BotState> {
    let mut config = Config::default();
    config.chat.channel_id = 42;
    config.rcon.password = "secret".to_string();
    Arc::new(BotState::with_collaborators(config, rcon, orchestrator, chat))
}
