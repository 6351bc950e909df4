//! Text input handling (pure state transitions).
//!
//! Handles editing for the filter bar's text fields and the go-to-page prompt.
//! All functions are pure - no side effects, testable without TUI.
//! The cursor counts characters, not bytes.

/// Which field an input buffer edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Free-text search; applied on every keystroke.
    Search,
    /// Start date bound; applied on submit.
    StartDate,
    /// End date bound; applied on submit.
    EndDate,
    /// Go-to-page prompt; applied on submit.
    GoToPage,
}

impl InputField {
    /// Whether edits take effect immediately rather than on submit.
    pub fn is_live(self) -> bool {
        matches!(self, InputField::Search)
    }

    /// Box title shown in the filter bar.
    pub fn title(self) -> &'static str {
        match self {
            InputField::Search => "Search",
            InputField::StartDate => "Start date",
            InputField::EndDate => "End date",
            InputField::GoToPage => "Go to page",
        }
    }
}

/// A field being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    /// Which field the text belongs to.
    pub field: InputField,
    /// Text typed so far.
    pub text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl InputBuffer {
    /// Start editing with existing text, cursor at the end.
    pub fn new(field: InputField, text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            field,
            text,
            cursor,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(mut buffer: InputBuffer, ch: char) -> InputBuffer {
    let at = buffer.byte_index(buffer.cursor);
    buffer.text.insert(at, ch);
    buffer.cursor += 1;
    buffer
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(mut buffer: InputBuffer) -> InputBuffer {
    if buffer.cursor > 0 {
        let at = buffer.byte_index(buffer.cursor - 1);
        buffer.text.remove(at);
        buffer.cursor -= 1;
    }
    buffer
}

/// Delete the character under the cursor, if any.
pub fn handle_delete(mut buffer: InputBuffer) -> InputBuffer {
    if buffer.cursor < buffer.text.chars().count() {
        let at = buffer.byte_index(buffer.cursor);
        buffer.text.remove(at);
    }
    buffer
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut buffer: InputBuffer) -> InputBuffer {
    buffer.cursor = buffer.cursor.saturating_sub(1);
    buffer
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut buffer: InputBuffer) -> InputBuffer {
    buffer.cursor = (buffer.cursor + 1).min(buffer.text.chars().count());
    buffer
}

/// Move the cursor to the start.
pub fn handle_home(mut buffer: InputBuffer) -> InputBuffer {
    buffer.cursor = 0;
    buffer
}

/// Move the cursor past the last character.
pub fn handle_end(mut buffer: InputBuffer) -> InputBuffer {
    buffer.cursor = buffer.text.chars().count();
    buffer
}
