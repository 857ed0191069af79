//! Main TUI application state and logic

use crate::analysis::Analysis;
use crate::error::{AppError, AppResult};
use crate::ui::editor::Editor;
use crate::ui::panes::{self, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

/// Rows moved by PageUp/PageDown in the side pane
const PAGE_ROWS: usize = 10;

/// Which view the right-hand pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePane {
    Tree,
    Tokens,
}

impl SidePane {
    pub fn toggle(self) -> Self {
        match self {
            SidePane::Tree => SidePane::Tokens,
            SidePane::Tokens => SidePane::Tree,
        }
    }
}

/// The main application state
pub struct App {
    /// File the buffer is saved to, if any
    pub path: Option<PathBuf>,

    pub editor: Editor,

    /// Result of the latest analysis pass over `editor`
    pub analysis: Analysis,

    pub side_pane: SidePane,

    pub source_scroll: usize,
    pub side_scroll: usize,

    /// Unsaved edits since the last load or save
    pub modified: bool,

    pub should_quit: bool,

    pub status_message: String,
    pub status_is_error: bool,
}

impl App {
    pub fn new(path: Option<PathBuf>, source: String) -> Self {
        let analysis = Analysis::run(&source);
        App {
            path,
            editor: Editor::new(source),
            analysis,
            side_pane: SidePane::Tree,
            source_scroll: 0,
            side_scroll: 0,
            modified: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    fn file_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[scratch]".to_string())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let cursor = self.editor.line_col();

        panes::render_source_pane(
            frame,
            columns[0],
            self.editor.text(),
            &self.analysis,
            cursor,
            &mut self.source_scroll,
        );

        match self.side_pane {
            SidePane::Tree => panes::render_tree_pane(
                frame,
                columns[1],
                &self.analysis.tree,
                &mut self.side_scroll,
            ),
            SidePane::Tokens => panes::render_tokens_pane(
                frame,
                columns[1],
                &self.analysis.token_rows(),
                &mut self.side_scroll,
            ),
        }

        let file_name = self.file_name();
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                file_name: &file_name,
                modified: self.modified,
                message: &self.status_message,
                is_error: self.status_is_error,
                cursor,
                token_count: self.analysis.tokens.len(),
                node_count: self.analysis.node_count(),
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = message.into();
        self.status_is_error = is_error;
    }

    /// Re-run the whole pipeline on the current buffer
    fn edited(&mut self) {
        self.modified = true;
        self.analysis = Analysis::run(self.editor.text());
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') | KeyCode::Char('S') if ctrl => match self.save() {
                Ok(()) => self.set_status("Saved", false),
                Err(e) => {
                    warn!(error = %e, "save failed");
                    self.set_status(e.to_string(), true);
                }
            },
            KeyCode::F(2) => {
                self.side_pane = self.side_pane.toggle();
                self.side_scroll = 0;
            }
            KeyCode::PageUp => self.side_scroll = self.side_scroll.saturating_sub(PAGE_ROWS),
            KeyCode::PageDown => self.side_scroll = self.side_scroll.saturating_add(PAGE_ROWS),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            KeyCode::Enter => {
                self.editor.insert_char('\n');
                self.edited();
            }
            KeyCode::Tab => {
                self.editor.insert_str("    ");
                self.edited();
            }
            KeyCode::Backspace => {
                if self.editor.backspace() {
                    self.edited();
                }
            }
            KeyCode::Delete => {
                if self.editor.delete() {
                    self.edited();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.editor.insert_char(c);
                self.edited();
            }
            _ => {}
        }
    }

    /// Write the buffer back to its path
    pub fn save(&mut self) -> AppResult<()> {
        let path = self.path.clone().ok_or_else(|| AppError::Write {
            path: PathBuf::from("[scratch]"),
            source: io::Error::new(io::ErrorKind::NotFound, "no file path was given"),
        })?;
        fs::write(&path, self.editor.text()).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = self.editor.text().len(), "saved buffer");
        self.modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::NodeKind;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => press(app, KeyCode::Enter),
                c => press(app, KeyCode::Char(c)),
            }
        }
    }

    #[test]
    fn test_typing_reanalyzes() {
        let mut app = App::new(None, String::new());
        assert!(app.analysis.tree.children.is_empty());

        type_text(&mut app, "int x = 5;");
        assert!(app.modified);
        assert_eq!(app.analysis.tokens.len(), 5);
        assert_eq!(app.analysis.tree.children[0].kind, NodeKind::VarDecl);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.editor.text(), "int x = 5");
        assert_eq!(app.analysis.tokens.len(), 4);
    }

    #[test]
    fn test_incomplete_text_still_has_tree() {
        let mut app = App::new(None, String::new());
        type_text(&mut app, "void f(int a) {\n  if (a");
        let func = &app.analysis.tree.children[0];
        assert_eq!(func.kind, NodeKind::FunctionDef);
    }

    #[test]
    fn test_toggle_side_pane() {
        let mut app = App::new(None, String::new());
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.side_pane, SidePane::Tokens);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.side_pane, SidePane::Tree);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(None, String::new());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.editor.text(), "");
    }

    #[test]
    fn test_save_without_path_reports_error() {
        let mut app = App::new(None, "int x;".to_string());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.status_is_error);
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.c");
        let mut app = App::new(Some(path.clone()), String::new());
        type_text(&mut app, "int y;");
        app.save().unwrap();
        assert!(!app.modified);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "int y;");
    }
}
