//! Command-line configuration

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Live C structure viewer: highlighted source, token list and syntax tree.
#[derive(Parser, Debug, Clone)]
#[command(name = "crustlens", version, about)]
pub struct Args {
    /// C source file to open. A missing file starts an empty buffer saved to
    /// that path; without a path, `--dump` reads standard input.
    pub path: Option<PathBuf>,

    /// Print the analysis to stdout instead of starting the viewer
    #[arg(short = 'd', long = "dump", value_enum)]
    pub dump: Option<DumpTarget>,

    /// Write log output to this file (the viewer never logs to the terminal)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpTarget {
    /// One line per emitted token
    Tokens,
    /// Indented syntax tree outline
    Tree,
}
