use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line query editor with a character-indexed cursor.
#[derive(Debug, Default)]
pub(crate) struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    pub(crate) fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Display width of the text before the cursor, for terminal cursor
    /// placement.
    pub(crate) fn cursor_offset(&self) -> u16 {
        let byte_index = self.byte_index(self.cursor);
        self.text[..byte_index].width() as u16
    }

    /// Apply a key event. Returns true when the text changed, which is what
    /// triggers a new query-change event upstream.
    pub(crate) fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.text.is_empty() {
                    return false;
                }
                self.text.clear();
                self.cursor = 0;
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_index = self.byte_index(self.cursor);
                self.text.insert(byte_index, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let byte_index = self.byte_index(self.cursor);
                self.text.remove(byte_index);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.text.chars().count() {
                    return false;
                }
                let byte_index = self.byte_index(self.cursor);
                self.text.remove(byte_index);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                false
            }
            _ => false,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_and_reports_changes() {
        let mut input = SearchInput::default();
        assert!(input.input(key(KeyCode::Char('a'))));
        assert!(input.input(key(KeyCode::Char('b'))));
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn backspace_at_start_changes_nothing() {
        let mut input = SearchInput::default();
        assert!(!input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn editing_in_the_middle_respects_multibyte_boundaries() {
        let mut input = SearchInput::new("héllo");
        input.input(key(KeyCode::Home));
        input.input(key(KeyCode::Right));
        input.input(key(KeyCode::Right));
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "hllo");
    }

    #[test]
    fn movement_keys_do_not_report_changes() {
        let mut input = SearchInput::new("rust");
        assert!(!input.input(key(KeyCode::Left)));
        assert!(!input.input(key(KeyCode::End)));
        assert_eq!(input.text(), "rust");
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut input = SearchInput::new("rust");
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.input(clear));
        assert_eq!(input.text(), "");
        assert!(!input.input(clear));
    }
}
