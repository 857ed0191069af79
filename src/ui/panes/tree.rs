//! Syntax tree pane rendering

use super::clamp_scroll;
use crate::parser::SyntaxNode;
use crate::ui::theme::{border_style, node_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// `"├─ "`-style prefix for a row at `depth`
pub fn indent_prefix(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        format!("{}├─ ", "│  ".repeat(depth - 1))
    }
}

/// Render the tree outline, one node per row
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &SyntaxNode,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .padding(Padding::new(1, 0, 0, 0));

    let rows = tree.outline();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let items: Vec<ListItem> = rows
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    indent_prefix(row.depth),
                    Style::default().fg(DEFAULT_THEME.border_normal),
                ),
                Span::styled(row.text, node_style(row.kind)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefix() {
        assert_eq!(indent_prefix(0), "");
        assert_eq!(indent_prefix(1), "├─ ");
        assert_eq!(indent_prefix(3), "│  │  ├─ ");
    }
}
