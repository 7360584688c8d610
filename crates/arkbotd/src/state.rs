//! Shared bot state

use crate::Config;
use crate::chat::ChatPlatform;
use crate::orchestrator::{KubectlOrchestrator, Orchestrator};
use crate::readiness::ReadinessChecker;
use arkcore::{CommandExecutor, RconClient};
use std::sync::Arc;

/// Collaborators shared by the monitor and the command handlers
///
/// Everything in here is stateless per call, so clones of the `Arc`s can be
/// handed to concurrent tasks freely.
pub struct BotState {
    pub config: Config,
    pub rcon: Arc<dyn CommandExecutor>,
    pub orchestrator: Arc<dyn Orchestrator>,
    pub chat: Arc<dyn ChatPlatform>,
    pub readiness: Arc<ReadinessChecker>,
}

impl BotState {
    /// Wire up the production collaborators from configuration
    pub fn new(config: Config, chat: Arc<dyn ChatPlatform>) -> Self {
        let rcon: Arc<dyn CommandExecutor> = Arc::new(RconClient::new(
            config.rcon.host.clone(),
            config.rcon.port,
            config.rcon.password.clone(),
        ));
        let orchestrator: Arc<dyn Orchestrator> =
            Arc::new(KubectlOrchestrator::new(&config.orchestrator));

        Self::with_collaborators(config, rcon, orchestrator, chat)
    }

    /// Build state around caller-supplied collaborators
    pub fn with_collaborators(
        config: Config,
        rcon: Arc<dyn CommandExecutor>,
        orchestrator: Arc<dyn Orchestrator>,
        chat: Arc<dyn ChatPlatform>,
    ) -> Self {
        let readiness = Arc::new(
            ReadinessChecker::new(orchestrator.clone(), rcon.clone())
                .with_rcon_timeout(config.monitor.rcon_timeout()),
        );

        Self {
            config,
            rcon,
            orchestrator,
            chat,
            readiness,
        }
    }

    pub fn channel_id(&self) -> u64 {
        self.config.chat.channel_id
    }

    pub fn command_prefix(&self) -> &str {
        &self.config.chat.command_prefix
    }
}
