//! Source code pane rendering with syntax highlighting
//!
//! This module renders the editable source pane. Styling comes entirely from
//! the latest [`Analysis`]: every character is drawn with the style of the
//! token covering it, so a new analysis pass replaces all previous styling.
//!
//! # Features
//!
//! - Per-category highlighting from the token stream (comments spanning
//!   several lines included)
//! - Current line highlighting and line numbering
//! - Vertical scroll that follows the cursor

use crate::analysis::Analysis;
use crate::parser::Category;
use crate::ui::theme::{border_style, category_style, DEFAULT_THEME};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the `"{:4} "` line-number gutter
pub const GUTTER_WIDTH: u16 = 5;

/// Split `source` into lines of styled spans using a per-character category map.
pub fn highlight_lines(source: &str, map: &[Option<Category>]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for raw_line in source.split('\n') {
        let chars: Vec<char> = raw_line.chars().collect();
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_category = None;

        for (i, ch) in chars.iter().enumerate() {
            let category = map.get(offset + i).copied().flatten();
            if category != run_category && !run.is_empty() {
                spans.push(styled_run(std::mem::take(&mut run), run_category));
            }
            run_category = category;
            run.push(*ch);
        }
        if !run.is_empty() {
            spans.push(styled_run(run, run_category));
        }

        lines.push(Line::from(spans));
        offset += chars.len() + 1;
    }

    lines
}

fn styled_run(text: String, category: Option<Category>) -> Span<'static> {
    match category {
        Some(category) => Span::styled(text, category_style(category)),
        None => Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
    }
}

/// Keep `line` inside a window of `height` rows starting at `offset`.
pub fn follow_cursor(offset: usize, line: usize, height: usize) -> usize {
    if line < offset {
        line
    } else if line >= offset + height {
        line + 1 - height
    } else {
        offset
    }
}

/// Render the source code pane and place the terminal cursor
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    analysis: &Analysis,
    cursor: (usize, usize),
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style(true));

    let (cursor_line, cursor_col) = cursor;
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    *scroll_offset = follow_cursor(*scroll_offset, cursor_line, visible_height);

    let map = analysis.highlight_map(source_code);
    let visible_lines: Vec<Line> = highlight_lines(source_code, &map)
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, mut line)| {
            let is_current = idx == cursor_line;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", idx + 1), num_style)];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);

    if let Some(position) = cursor_position(area, cursor_line - *scroll_offset, cursor_col) {
        frame.set_cursor_position(position);
    }
}

/// Screen cell for the cursor, or `None` when it falls outside the pane's inner area.
pub fn cursor_position(area: Rect, row: usize, col: usize) -> Option<Position> {
    let row = u16::try_from(row).ok()?;
    let col = u16::try_from(col).ok()?;
    let x = area.x.checked_add(1 + GUTTER_WIDTH)?.checked_add(col)?;
    let y = area.y.checked_add(1)?.checked_add(row)?;
    (x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1))
        .then(|| Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_lines_groups_runs() {
        let source = "int x;\n// hi";
        let map = Analysis::run(source).highlight_map(source);
        let lines = highlight_lines(source, &map);
        assert_eq!(lines.len(), 2);

        let first: Vec<&str> = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, vec!["int", " ", "x", ";"]);
        assert_eq!(lines[0].spans[0].style, category_style(Category::ReservedWord));

        assert_eq!(lines[1].spans.len(), 1);
        assert_eq!(lines[1].spans[0].style, category_style(Category::Comment));
    }

    #[test]
    fn test_cursor_position_bounds() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(cursor_position(area, 2, 3), Some(Position::new(9, 3)));
        // Past the right border
        assert_eq!(cursor_position(area, 0, 34), None);
        // Columns beyond u16 must not wrap back into the pane
        assert_eq!(cursor_position(area, 0, 65_536 + 3), None);
        assert_eq!(cursor_position(area, 70_000, 0), None);
    }

    #[test]
    fn test_follow_cursor() {
        assert_eq!(follow_cursor(0, 3, 10), 0);
        assert_eq!(follow_cursor(5, 3, 10), 3);
        assert_eq!(follow_cursor(0, 12, 10), 3);
    }
}
