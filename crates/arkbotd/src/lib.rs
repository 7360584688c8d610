//! arkbotd library interface

pub mod bot;
pub mod chat;
pub mod config;
pub mod console;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod monitor;
pub mod orchestrator;
pub mod readiness;
pub mod state;

#[cfg(test)]
mod testing;

pub use bot::Bot;
pub use config::Config;
pub use readiness::ReadinessChecker;
pub use state::BotState;
