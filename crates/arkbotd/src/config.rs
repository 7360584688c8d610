//! Configuration management

use arkcore::protocol::DEFAULT_RCON_PORT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const RCON_HOST_ENV_VAR: &str = "RCON_HOST";
const RCON_PORT_ENV_VAR: &str = "RCON_PORT";
const RCON_PASSWORD_ENV_VAR: &str = "RCON_PASSWORD";
const CHANNEL_ID_ENV_VAR: &str = "CHAT_CHANNEL_ID";
const NAMESPACE_ENV_VAR: &str = "KUBERNETES_NAMESPACE";
const DEPLOYMENT_ENV_VAR: &str = "KUBERNETES_DEPLOYMENT_NAME";
const MONITORING_INTERVAL_ENV_VAR: &str = "MONITORING_INTERVAL";
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Configuration problems found at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rcon: RconConfig,
    pub orchestrator: OrchestratorConfig,
    pub chat: ChatConfig,
    pub monitor: MonitorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RconConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    pub namespace: String,
    pub deployment: String,
    /// Path or name of the kubectl binary
    pub kubectl: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub channel_id: u64,
    pub command_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    pub interval_seconds: u64,
    pub rcon_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn rcon_timeout(&self) -> Duration {
        Duration::from_secs(self.rcon_timeout_seconds)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration
    pub fn default() -> Self {
        Self {
            rcon: RconConfig {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_RCON_PORT,
                password: String::new(),
            },
            orchestrator: OrchestratorConfig {
                namespace: "ark-survival-ascended".to_string(),
                deployment: "ark-server".to_string(),
                kubectl: "kubectl".to_string(),
            },
            chat: ChatConfig {
                channel_id: 0,
                command_prefix: "!ark ".to_string(),
            },
            monitor: MonitorConfig {
                interval_seconds: 30,
                rcon_timeout_seconds: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some(PathBuf::from("./logs/arkbotd.log")),
                json: false,
            },
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup(RCON_HOST_ENV_VAR) {
            self.rcon.host = host;
        }
        if let Some(port) = lookup(RCON_PORT_ENV_VAR) {
            self.rcon.port = parse_var(RCON_PORT_ENV_VAR, port)?;
        }
        if let Some(password) = lookup(RCON_PASSWORD_ENV_VAR) {
            self.rcon.password = password;
        }
        if let Some(channel_id) = lookup(CHANNEL_ID_ENV_VAR) {
            self.chat.channel_id = parse_var(CHANNEL_ID_ENV_VAR, channel_id)?;
        }
        if let Some(namespace) = lookup(NAMESPACE_ENV_VAR) {
            self.orchestrator.namespace = namespace;
        }
        if let Some(deployment) = lookup(DEPLOYMENT_ENV_VAR) {
            self.orchestrator.deployment = deployment;
        }
        if let Some(interval) = lookup(MONITORING_INTERVAL_ENV_VAR) {
            self.monitor.interval_seconds = parse_var(MONITORING_INTERVAL_ENV_VAR, interval)?;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV_VAR) {
            self.logging.level = level.to_lowercase();
        }
        Ok(())
    }

    /// Check that everything needed to run is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rcon.password.is_empty() {
            return Err(ConfigError::Missing("rcon.password"));
        }
        if self.chat.channel_id == 0 {
            return Err(ConfigError::Missing("chat.channel_id"));
        }
        if self.monitor.interval_seconds == 0 {
            return Err(ConfigError::Missing("monitor.interval_seconds"));
        }
        // A zero timeout races the probe against the first poll
        if self.monitor.rcon_timeout_seconds == 0 {
            return Err(ConfigError::Missing("monitor.rcon_timeout_seconds"));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
