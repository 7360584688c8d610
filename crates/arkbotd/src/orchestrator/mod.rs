//! Orchestration layer (deployment readiness and restarts)

pub mod kubectl;

pub use kubectl::KubectlOrchestrator;

use async_trait::async_trait;

/// Infrastructure-only view of the server deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfraStatus {
    /// At least one replica is ready
    Running,
    /// No replica is ready
    NotReady,
    /// The orchestrator could not be queried
    Error,
}

/// The narrow slice of the orchestration API the bot depends on
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Report whether the deployment has ready replicas
    async fn get_server_status(&self) -> InfraStatus;

    /// Trigger a rolling restart. Returns whether the request was accepted.
    async fn restart_server(&self) -> bool;
}
