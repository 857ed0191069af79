//! `tracing` subscriber setup
//!
//! The viewer owns the terminal, so in interactive mode events only go to a
//! file (or nowhere). Dump mode logs to stderr next to its stdout output.

use crate::error::{AppError, AppResult};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

pub fn init_logging(target: LogTarget<'_>, default_level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(path).map_err(|source| AppError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
