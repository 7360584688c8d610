//! Protocol definitions and structures

pub mod constants;
pub mod packet;

pub use constants::*;
pub use packet::{Packet, PacketType};
