//! Search input handling (pure state transitions).
//!
//! Edits the text box the free-text query is typed into.
//! All functions are pure - no side effects, testable without TUI.
//!
//! The cursor counts characters, not bytes, so multi-byte input never
//! splits a code point.

/// Text of the search box plus the cursor position (in chars).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Input holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, `0..=text.chars().count()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the `char_idx`-th character (or the end of the text).
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

/// Insert the character at the cursor and advance the cursor.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    let offset = input.byte_offset(input.cursor);
    input.text.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let offset = input.byte_offset(input.cursor - 1);
    input.text.remove(offset);
    input.cursor -= 1;
    input
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position.
/// Saturates at the text length (does not wrap).
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    input.cursor = (input.cursor + 1).min(input.char_len());
    input
}

/// Move cursor to the start.
pub fn handle_cursor_home(mut input: SearchInput) -> SearchInput {
    input.cursor = 0;
    input
}

/// Move cursor past the last character.
pub fn handle_cursor_end(mut input: SearchInput) -> SearchInput {
    input.cursor = input.char_len();
    input
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
