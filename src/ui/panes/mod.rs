//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Editable source with token-driven highlighting and cursor
//! - [`tree`]: Syntax tree outline
//! - [`tokens`]: Token listing (number, category, text)
//! - [`status`]: Status bar with keybindings and analysis counters
//!
//! Each pane module exports a primary `render_*` function. Panes hold no
//! state of their own; scroll offsets live in [`App`](crate::ui::App).

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

/// Clamp a list scroll offset so the last page stays full.
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
