//! Editable text buffer with a character cursor
//!
//! The cursor is a character offset, the same unit token spans use, so the
//! highlighter and the cursor never disagree about positions.

#[derive(Debug, Clone, Default)]
pub struct Editor {
    text: String,
    cursor: usize,
}

impl Editor {
    pub fn new(text: String) -> Self {
        Editor { text, cursor: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    /// Character offsets where each line starts
    fn line_starts(&self) -> Vec<usize> {
        let mut starts = vec![0];
        starts.extend(
            self.text
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == '\n')
                .map(|(i, _)| i + 1),
        );
        starts
    }

    fn line_len(&self, starts: &[usize], line: usize) -> usize {
        match starts.get(line + 1) {
            Some(next) => next - 1 - starts[line],
            None => self.char_count() - starts[line],
        }
    }

    /// Zero-based (line, column) of the cursor
    pub fn line_col(&self) -> (usize, usize) {
        let starts = self.line_starts();
        let line = starts.partition_point(|&s| s <= self.cursor) - 1;
        (line, self.cursor - starts[line])
    }

    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor; `false` at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character under the cursor; `false` at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.line_col();
        if line > 0 {
            self.move_to(line - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.line_col();
        if line + 1 < self.line_count() {
            self.move_to(line + 1, col);
        }
    }

    pub fn move_home(&mut self) {
        let (line, _) = self.line_col();
        self.move_to(line, 0);
    }

    pub fn move_end(&mut self) {
        let (line, _) = self.line_col();
        self.move_to(line, usize::MAX);
    }

    /// Place the cursor on `line`, clamping `col` to the line length
    fn move_to(&mut self, line: usize, col: usize) {
        let starts = self.line_starts();
        let col = col.min(self.line_len(&starts, line));
        self.cursor = starts[line] + col;
    }
}
