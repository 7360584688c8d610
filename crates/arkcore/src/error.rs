//! Error types

use thiserror::Error;

/// RCON protocol errors
#[derive(Error, Debug)]
pub enum RconError {
    #[error("Packet too large: {size} bytes (max: {max})")]
    PacketTooLarge { size: usize, max: usize },

    #[error("Malformed packet: declared size {0} is below the minimum")]
    MalformedPacket(u32),

    #[error("Connection closed before a reply was received")]
    ConnectionClosed,

    #[error("Authentication rejected (reply id {id}, type {packet_type})")]
    AuthRejected { id: i32, packet_type: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for RCON operations
pub type Result<T> = std::result::Result<T, RconError>;
