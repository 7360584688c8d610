//! Type definitions

pub mod player;
pub mod status;

pub use player::{NO_PLAYERS_PREFIX, parse_player_list};
pub use status::ServerStatus;
