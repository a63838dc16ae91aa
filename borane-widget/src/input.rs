/// Single-line text input with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole content and moves the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into().replace(['\n', '\r'], " ");
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputLine {
        let mut input = InputLine::new();
        for c in s.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn insert_and_clear() {
        let mut input = typed("hey");
        assert_eq!(input.text(), "hey");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn newlines_are_ignored() {
        let mut input = typed("a\nb\r");
        assert_eq!(input.text(), "ab");
        input.set("x\ny");
        assert_eq!(input.text(), "x y");
    }

    #[test]
    fn editing_multibyte_text() {
        let mut input = typed("h🤔i");
        input.left();
        input.backspace();
        assert_eq!(input.text(), "hi");
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn cursor_movement_and_delete() {
        let mut input = typed("abc");
        input.home();
        input.delete();
        assert_eq!(input.text(), "bc");
        input.right();
        input.insert('X');
        assert_eq!(input.text(), "bXc");
        input.end();
        input.right();
        assert_eq!(input.cursor(), input.text().len());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = typed("a");
        input.home();
        input.backspace();
        assert_eq!(input.text(), "a");
    }
}
