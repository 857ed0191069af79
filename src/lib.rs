//! # Introduction
//!
//! crustlens tokenizes and parses a restricted subset of C on every edit and
//! shows the result live: token-driven highlighting of the source next to a
//! structural syntax tree (or a token listing), in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → SyntaxNode tree → Highlighting / Tree view
//! ```
//!
//! 1. [`parser`]: rule-table lexer and skeleton recursive-descent parser.
//!    Neither stage can fail; incomplete text yields a partial tree.
//! 2. [`analysis`]: one full pass over a source snapshot, plus the per-character
//!    highlight map and token listing derived from it.
//! 3. [`ui`]: ratatui-based editor and views; not part of the stable library API.
//!
//! ## Recognized structure
//!
//! Declarations and functions of `int`, `float`, `char`, `double`, `void`;
//! parameter lists; `if`/`while` blocks; `return`; comments and preprocessor
//! directives. Everything else becomes flat expression statements.

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod ui;
