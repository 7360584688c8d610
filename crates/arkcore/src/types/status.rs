//! Composed server status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Readiness of the game server as seen by players
///
/// Precedence, strongest first: `Error`, `NotReady`, `Starting`, `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ServerStatus {
    /// Replicas are ready and the console answers
    Running,
    /// Replicas are ready but the console does not answer yet
    Starting,
    /// The orchestrator reports no ready replicas
    NotReady,
    /// The status could not be determined
    Error,
}

impl ServerStatus {
    /// Label used in logs and messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Starting => "starting",
            Self::NotReady => "not_ready",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "starting" => Ok(Self::Starting),
            "not_ready" => Ok(Self::NotReady),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown server status: {other}")),
        }
    }
}
