//! Application error type
//!
//! The analysis pipeline itself cannot fail; these are the failures of the
//! surrounding tool (files, terminal, logging).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
