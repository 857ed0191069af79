//! Token listing pane rendering

use super::clamp_scroll;
use crate::analysis::TokenRow;
use crate::parser::Category;
use crate::ui::theme::{border_style, category_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Widest category name plus one column of padding
pub fn category_column_width() -> usize {
    Category::ALL
        .iter()
        .map(|c| c.display_name().len())
        .max()
        .unwrap_or(0)
        + 1
}

/// Render the lexical analysis listing: token number, category, text
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[TokenRow],
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", rows.len()))
        .borders(Borders::ALL)
        .border_style(border_style(false));

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let category_width = category_column_width();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, rows.len(), visible_height);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<11}", row.name),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<category_width$}", row.category.display_name()),
                    category_style(row.category),
                ),
                Span::styled(row.text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_column_fits_longest_name() {
        // "Preprocessor Directive"
        assert_eq!(category_column_width(), 23);
    }
}
