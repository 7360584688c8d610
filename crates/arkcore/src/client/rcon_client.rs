//! One-shot RCON client

use super::{CommandExecutor, RconSession};
use crate::codec::decode_text;
use crate::error::{RconError, Result};
use async_trait::async_trait;
use std::fmt;

/// Connection settings for the server console
#[derive(Clone)]
pub struct RconClient {
    host: String,
    port: u16,
    password: String,
}

impl RconClient {
    /// Create a new client. Nothing is connected until a command runs.
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
        }
    }

    /// `host:port` of the console
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connect and authenticate without running a command
    pub async fn check_auth(&self) -> bool {
        let result = async {
            let mut session = RconSession::connect(&self.host, self.port).await?;
            let authenticated = session.authenticate(&self.password).await;
            close_quietly(session).await;
            authenticated
        }
        .await;

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("RCON auth check against {} failed: {}", self.address(), e);
                false
            }
        }
    }

    async fn run(&self, command: &str) -> Result<Option<String>> {
        let mut session = RconSession::connect(&self.host, self.port).await?;
        let result = exchange(&mut session, &self.password, command).await;
        close_quietly(session).await;
        result
    }
}

/// Authenticate and run one command on an open session
async fn exchange(
    session: &mut RconSession,
    password: &str,
    command: &str,
) -> Result<Option<String>> {
    session.authenticate(password).await?;

    let reply = session.exchange(command).await?;
    if !reply.is_response_value() {
        tracing::debug!(
            "Unexpected RCON reply type {} to {:?}",
            reply.packet_type,
            command
        );
        return Ok(None);
    }

    Ok(Some(decode_text(&reply.body).trim().to_string()))
}

async fn close_quietly(session: RconSession) {
    if let Err(e) = session.close().await {
        tracing::trace!("Error closing RCON connection: {}", e);
    }
}

#[async_trait]
impl CommandExecutor for RconClient {
    async fn execute(&self, command: &str) -> Option<String> {
        match self.run(command).await {
            Ok(reply) => reply,
            Err(e @ RconError::AuthRejected { .. }) => {
                tracing::warn!("RCON authentication to {} failed: {}", self.address(), e);
                None
            }
            Err(e) => {
                tracing::debug!("RCON command {:?} to {} failed: {}", command, self.address(), e);
                None
            }
        }
    }
}

impl fmt::Debug for RconClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RconClient")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .finish()
    }
}
