//! RCON client
//!
//! Every command runs on its own connection: connect, authenticate, send one
//! command, read one reply, close. Nothing is pooled, so concurrent callers
//! never share a socket.

pub mod rcon_client;
pub mod session;

pub use rcon_client::RconClient;
pub use session::RconSession;

use crate::protocol::LIST_PLAYERS_COMMAND;
use crate::types::parse_player_list;
use async_trait::async_trait;
use std::time::Duration;

/// Something that can run a console command and hand back its reply
///
/// `None` is the only failure signal: refused connections, rejected
/// passwords and garbled replies all look the same to callers.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run a command and return the trimmed reply
    async fn execute(&self, command: &str) -> Option<String>;

    /// Run a command, giving up after `timeout`
    async fn execute_with_timeout(&self, command: &str, timeout: Duration) -> Option<String> {
        match tokio::time::timeout(timeout, self.execute(command)).await {
            Ok(reply) => reply,
            Err(_) => {
                tracing::debug!("RCON command {:?} timed out after {:?}", command, timeout);
                None
            }
        }
    }

    /// Fetch the names of connected players
    ///
    /// `Some(vec![])` means nobody is online; `None` means no reply.
    async fn list_players(&self) -> Option<Vec<String>> {
        let response = self.execute(LIST_PLAYERS_COMMAND).await?;
        Some(parse_player_list(&response))
    }
}
