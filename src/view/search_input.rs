//! Search box widget.

use crate::state::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name or description…";

/// Renders the free-text search box.
///
/// While focused the cursor is drawn as a reversed cell; unfocused, an
/// empty box shows a placeholder and the key that focuses it.
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchBox<'a> {
    /// Box showing `input`. `focused` draws the cursor.
    pub fn new(input: &'a SearchInput, focused: bool, palette: &'a Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }

    fn content(&self) -> Line<'static> {
        let text = self.input.text();

        if !self.focused {
            return if text.is_empty() {
                Line::from(Span::styled(PLACEHOLDER, self.palette.muted))
            } else {
                Line::from(text.to_string())
            };
        }

        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let under_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                under_cursor,
                self.palette.accent.add_modifier(Modifier::REVERSED),
            ),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border) = if self.focused {
            (" Search (Enter to apply, Esc to clear) ", self.palette.border_focused)
        } else {
            (" Search [/] ", self.palette.border)
        };

        Paragraph::new(self.content())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .render(area, buf);
    }
}
