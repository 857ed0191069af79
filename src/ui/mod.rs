//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, save, side-pane toggle
//! - **[`editor`]**: the editable text buffer and its cursor
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   syntax tree, token list, status bar)
//! - **[`theme`]**: color palette and the category → style mapping
//!
//! The entry point for consumers is [`App`]: construct it with a path and the
//! initial text, then call [`App::run`] to start the event loop. Every edit
//! re-runs [`Analysis::run`](crate::analysis::Analysis::run) on the full buffer.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;
