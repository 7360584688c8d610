//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `logging.level`. When `logging.file` is set, a second
/// layer appends plain-text records to that file.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = match &config.file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    let (json_layer, text_layer) = if config.json {
        (Some(fmt::layer().json().with_target(false)), None)
    } else {
        (None, Some(fmt::layer().compact().with_target(false)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn open_log_file(path: &std::path::Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
