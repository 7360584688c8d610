//! Protocol constants

/// Packet type of an authentication request
pub const SERVERDATA_AUTH: i32 = 3;

/// Packet type of a command request
pub const SERVERDATA_EXECCOMMAND: i32 = 2;

/// Packet type of an authentication reply.
///
/// Shares its value with [`SERVERDATA_EXECCOMMAND`]; the request id is what
/// tells the two apart.
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;

/// Packet type of a command reply
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Request id used for every outbound packet
pub const REQUEST_ID: i32 = 1;

/// Request id a server answers with when the password is wrong
pub const AUTH_FAILED_ID: i32 = -1;

/// Size of the length prefix in bytes
pub const SIZE_FIELD_LEN: usize = 4;

/// Bytes counted by the size field besides the body: id + type + two NULs
pub const PACKET_OVERHEAD: usize = 4 + 4 + 2;

/// Smallest valid value of the size field (empty body)
pub const MIN_PACKET_SIZE: usize = PACKET_OVERHEAD;

/// Largest accepted value of the size field (64 KB)
pub const MAX_PACKET_SIZE: usize = 65536;

/// Default RCON port of an ARK: Survival Ascended server
pub const DEFAULT_RCON_PORT: u16 = 27020;

/// Command used to probe whether the console answers
pub const PROBE_COMMAND: &str = "echo test";

/// Command that lists connected players
pub const LIST_PLAYERS_COMMAND: &str = "listplayers";
