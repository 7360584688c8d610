//! Composed server readiness
//!
//! The orchestrator says whether replicas are up; only a console reply says
//! whether players can actually join. The infrastructure signal gates the
//! console probe:
//!
//! | orchestrator | console   | status      |
//! |--------------|-----------|-------------|
//! | error        | (skipped) | `Error`     |
//! | not ready    | (skipped) | `NotReady`  |
//! | running      | no reply  | `Starting`  |
//! | running      | reply     | `Running`   |

use crate::monitor::StatusSource;
use crate::orchestrator::{InfraStatus, Orchestrator};
use arkcore::ServerStatus;
use arkcore::client::CommandExecutor;
use arkcore::protocol::PROBE_COMMAND;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Default time allowed for the console probe
pub const DEFAULT_RCON_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ReadinessChecker {
    orchestrator: Arc<dyn Orchestrator>,
    rcon: Arc<dyn CommandExecutor>,
    rcon_timeout: Duration,
}

impl ReadinessChecker {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, rcon: Arc<dyn CommandExecutor>) -> Self {
        Self {
            orchestrator,
            rcon,
            rcon_timeout: DEFAULT_RCON_TIMEOUT,
        }
    }

    pub fn with_rcon_timeout(mut self, rcon_timeout: Duration) -> Self {
        self.rcon_timeout = rcon_timeout;
        self
    }

    /// Compute the current status. Nothing is cached between calls.
    pub async fn get_status(&self) -> ServerStatus {
        match self.orchestrator.get_server_status().await {
            InfraStatus::Error => return ServerStatus::Error,
            InfraStatus::NotReady => return ServerStatus::NotReady,
            InfraStatus::Running => {}
        }

        if self.rcon_reachable().await {
            ServerStatus::Running
        } else {
            ServerStatus::Starting
        }
    }

    /// Any reply, even an empty one, counts as reachable
    async fn rcon_reachable(&self) -> bool {
        match tokio::time::timeout(self.rcon_timeout, self.rcon.execute(PROBE_COMMAND)).await {
            Ok(reply) => reply.is_some(),
            Err(_) => {
                tracing::debug!(
                    "RCON probe timed out after {:?}, server likely still starting",
                    self.rcon_timeout
                );
                false
            }
        }
    }

    /// Poll until the server is running
    ///
    /// Returns `true` as soon as the status is `Running`, `false` right away
    /// on `Error`, and `false` once more than `max_wait` has elapsed.
    pub async fn wait_for_ready(&self, max_wait: Duration, poll_interval: Duration) -> bool {
        let started = Instant::now();

        loop {
            if started.elapsed() > max_wait {
                tracing::warn!("Server did not become ready within {:?}", max_wait);
                return false;
            }

            match self.get_status().await {
                ServerStatus::Running => {
                    tracing::info!("Server is now ready and RCON accessible");
                    return true;
                }
                ServerStatus::Error => {
                    tracing::error!("Server status check returned error");
                    return false;
                }
                status => {
                    tracing::debug!(
                        "Server status: {}, waiting {:?} before next check",
                        status,
                        poll_interval
                    );
                }
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}

#[async_trait]
impl StatusSource for ReadinessChecker {
    async fn current_status(&self) -> anyhow::Result<ServerStatus> {
        Ok(self.get_status().await)
    }
}
