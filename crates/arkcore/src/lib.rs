//! # arkcore
//!
//! Core library for managing an ARK game server over RCON.
//!
//! This library provides the building blocks used by the `arkbotd` daemon
//! and by any other tool that needs to talk to the server console:
//!
//! - Protocol types and constants (packets, packet types, size limits)
//! - Encoding/decoding (codec for RCON packets, best-effort text decoding)
//! - A one-shot RCON client (connect, authenticate, execute, close)
//! - Shared types (server status, player list parsing)
//!
//! ## Example
//!
//! ```rust,no_run
//! use arkcore::client::{CommandExecutor, RconClient};
//!
//! # async fn run() {
//! let client = RconClient::new("127.0.0.1", 27020, "secret");
//! if let Some(reply) = client.execute("listplayers").await {
//!     println!("{reply}");
//! }
//! # }
//! ```

pub mod protocol;
pub mod codec;
pub mod client;
pub mod types;
pub mod error;

// Re-export commonly used types
pub use client::{CommandExecutor, RconClient};
pub use error::{RconError, Result};
pub use protocol::{Packet, PacketType};
pub use types::{ServerStatus, parse_player_list};
