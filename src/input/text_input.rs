use crate::terminal::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    Submit,
    NotHandled,
}

/// Single-line text editor with a character-indexed cursor.
pub struct TextInput {
    value: String,
    cursor_pos: usize,
    placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
            placeholder: String::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Display-column offset of the cursor, accounting for wide glyphs.
    pub fn cursor_offset(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.to_string().width())
            .sum()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    if ch == 'w' {
                        self.delete_word_left();
                        return KeyResult::Handled;
                    }
                    return KeyResult::NotHandled;
                }
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.delete_word_left();
                } else {
                    self.handle_backspace();
                }
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn handle_char(&mut self, ch: char) {
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = if self.cursor_pos >= char_indices.len() {
            self.value.len()
        } else {
            char_indices[self.cursor_pos]
        };
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let char_indices: Vec<usize> = self.value.char_indices().map(|(i, _)| i).collect();
        let byte_pos = char_indices[self.cursor_pos - 1];
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-')
    }

    fn move_word_left(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }

        self.cursor_pos = pos;
    }

    fn delete_word_left(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_track_cursor() {
        let mut input = TextInput::new();
        for ch in "fern".chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        assert_eq!(input.value(), "fern");
        assert_eq!(input.cursor_pos(), 4);

        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "fer");
        assert_eq!(input.cursor_pos(), 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = TextInput::new();
        input.set_value("fn");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);
        input.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(input.value(), "fern");
    }

    #[test]
    fn wide_glyph_cursor_offset() {
        let mut input = TextInput::new();
        input.set_value("龟背竹");
        assert_eq!(input.cursor_offset(), 6);
    }

    #[test]
    fn delete_word_left_removes_trailing_word() {
        let mut input = TextInput::new();
        input.set_value("snake plant");
        input.handle_key(KeyCode::Backspace, KeyModifiers::CONTROL);
        assert_eq!(input.value(), "snake ");
    }

    #[test]
    fn enter_submits() {
        let mut input = TextInput::new();
        input.set_value("monstera");
        let result = input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(result, KeyResult::Submit);
        assert_eq!(input.value(), "monstera");
    }
}
