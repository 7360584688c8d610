//! Packet types and structures

use super::constants::{
    PACKET_OVERHEAD, REQUEST_ID, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE,
    SERVERDATA_EXECCOMMAND, SERVERDATA_RESPONSE_VALUE,
};
use bytes::Bytes;

/// Outbound request types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PacketType {
    /// Authenticate the connection with the RCON password
    Auth = SERVERDATA_AUTH,

    /// Run a console command
    ExecCommand = SERVERDATA_EXECCOMMAND,
}

impl PacketType {
    /// Convert to the wire value
    #[inline]
    pub const fn to_i32(self) -> i32 {
        self as i32
    }
}

impl From<PacketType> for i32 {
    #[inline]
    fn from(value: PacketType) -> Self {
        value.to_i32()
    }
}

/// A single RCON packet
///
/// Inbound packets keep the raw type value because the protocol reuses `2`
/// for both command requests and authentication replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// Request id chosen by the client and echoed by the server
    pub id: i32,

    /// Raw packet type
    pub packet_type: i32,

    /// Body without the two trailing NUL bytes
    pub body: Bytes,
}

impl Packet {
    /// Create a packet from its parts
    pub fn new(id: i32, packet_type: i32, body: impl Into<Bytes>) -> Self {
        Self {
            id,
            packet_type,
            body: body.into(),
        }
    }

    /// Create an outbound request
    pub fn request(packet_type: PacketType, body: &str) -> Self {
        Self::new(
            REQUEST_ID,
            packet_type.to_i32(),
            Bytes::copy_from_slice(body.as_bytes()),
        )
    }

    /// Create an authentication request carrying the password
    pub fn auth(password: &str) -> Self {
        Self::request(PacketType::Auth, password)
    }

    /// Create a command request
    pub fn command(command: &str) -> Self {
        Self::request(PacketType::ExecCommand, command)
    }

    /// Value of the size field for this packet
    pub fn wire_size(&self) -> usize {
        PACKET_OVERHEAD + self.body.len()
    }

    /// Whether the packet carries the authentication-reply type tag
    pub fn is_auth_response(&self) -> bool {
        self.packet_type == SERVERDATA_AUTH_RESPONSE
    }

    /// Whether the packet is a command reply
    pub fn is_response_value(&self) -> bool {
        self.packet_type == SERVERDATA_RESPONSE_VALUE
    }
}
