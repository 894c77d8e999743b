//! Editable initiative field.
//!
//! Text buffer with cursor management plus a whole-value selection, backing
//! the inline edit of a combatant's initiative. Gaining focus selects the
//! entire displayed value, so the first keystroke overwrites instead of
//! appending.

/// A focused initiative cell's edit buffer.
#[derive(Debug, Clone)]
pub struct InitiativeField {
    content: String,
    cursor: usize,
    select_all: bool,
}

impl InitiativeField {
    /// Buffer for a field that just gained focus on the displayed value.
    pub fn focused(initial: impl Into<String>) -> Self {
        let content = initial.into();
        let cursor = content.len();
        let select_all = !content.is_empty();
        Self {
            content,
            cursor,
            select_all,
        }
    }

    /// Whether the whole value is currently selected.
    pub fn is_all_selected(&self) -> bool {
        self.select_all
    }

    pub fn insert_char(&mut self, c: char) {
        if self.select_all {
            self.replace_selection();
        }
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.select_all {
            self.replace_selection();
            return;
        }
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.select_all {
            self.replace_selection();
            return;
        }
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.content.len());
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        // Arrow keys collapse the selection to its matching edge.
        if self.select_all {
            self.select_all = false;
            self.cursor = 0;
            return;
        }
        if self.cursor > 0 {
            self.cursor = self.content[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.select_all {
            self.select_all = false;
            self.cursor = self.content.len();
            return;
        }
        if self.cursor < self.content.len() {
            self.cursor = self.content[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.content.len());
        }
    }

    pub fn move_home(&mut self) {
        self.select_all = false;
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.select_all = false;
        self.cursor = self.content.len();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn replace_selection(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.select_all = false;
    }
}

/// Parse committed field text into the value the tracker submits.
///
/// Whitespace-trimmed float parse; anything else becomes the NaN sentinel,
/// which is forwarded as-is rather than swallowed.
pub fn parse_initiative(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_selects_existing_value() {
        let field = InitiativeField::focused("17");
        assert!(field.is_all_selected());
        assert_eq!(field.text(), "17");
    }

    #[test]
    fn test_focus_on_empty_value_has_no_selection() {
        let field = InitiativeField::focused("");
        assert!(!field.is_all_selected());
        assert_eq!(field.cursor_position(), 0);
    }

    #[test]
    fn test_first_keystroke_overwrites_selection() {
        let mut field = InitiativeField::focused("17");
        field.insert_char('9');
        assert_eq!(field.text(), "9");
        assert!(!field.is_all_selected());
        field.insert_char('.');
        field.insert_char('5');
        assert_eq!(field.text(), "9.5");
    }

    #[test]
    fn test_backspace_clears_selection() {
        let mut field = InitiativeField::focused("17");
        field.backspace();
        assert_eq!(field.text(), "");
        field.backspace();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_arrows_collapse_selection_to_edges() {
        let mut field = InitiativeField::focused("17");
        field.move_left();
        assert!(!field.is_all_selected());
        assert_eq!(field.cursor_position(), 0);

        let mut field = InitiativeField::focused("17");
        field.move_right();
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn test_editing_after_collapse_behaves_like_plain_buffer() {
        let mut field = InitiativeField::focused("17");
        field.move_left();
        field.delete();
        assert_eq!(field.text(), "7");
        field.move_end();
        field.insert_char('0');
        assert_eq!(field.text(), "70");
        field.backspace();
        assert_eq!(field.text(), "7");
    }

    #[test]
    fn test_parse_plain_and_fractional() {
        assert_eq!(parse_initiative("18"), 18.0);
        assert_eq!(parse_initiative("10.5"), 10.5);
        assert_eq!(parse_initiative("-3"), -3.0);
        assert_eq!(parse_initiative("  7 "), 7.0);
    }

    #[test]
    fn test_parse_garbage_yields_nan() {
        assert!(parse_initiative("").is_nan());
        assert!(parse_initiative("dragon").is_nan());
        assert!(parse_initiative("12abc").is_nan());
    }
}
