//! Status bar rendering with keybindings and analysis counters

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub file_name: &'a str,
    pub modified: bool,
    pub message: &'a str,
    pub is_error: bool,
    pub cursor: (usize, usize),
    pub token_count: usize,
    pub node_count: usize,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let file_text = if data.modified {
        format!(" {} [+] ", data.file_name)
    } else {
        format!(" {} ", data.file_name)
    };

    let left_spans = vec![
        Span::styled(
            file_text,
            Style::default()
                .bg(if data.modified {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    let key_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(DEFAULT_THEME.comment);

    let (line, col) = data.cursor;
    let right_spans = vec![
        Span::styled(
            format!("Ln {}, Col {} ", line + 1, col + 1),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!("| {} tokens, {} nodes | ", data.token_count, data.node_count),
            text_style,
        ),
        Span::styled("F2", key_style),
        Span::styled(" tree/tokens ", text_style),
        Span::styled("^S", key_style),
        Span::styled(" save ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" quit ", text_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(left_paragraph, layout[0]);
    frame.render_widget(right_paragraph, layout[1]);
}
