//! Filter and sort bars.

use crate::state::{AppState, ViewMode};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Label of the industry filter when it is off.
pub const ALL_INDUSTRIES: &str = "All Industries";
/// Label of the location filter when it is off.
pub const ALL_LOCATIONS: &str = "All Locations";

/// Two lines: the facet filters, then sort and view mode.
pub struct ControlsBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> ControlsBar<'a> {
    /// Bars reflecting `state`.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn filter_line(&self) -> Line<'static> {
        let criteria = self.state.criteria();
        let value = |choice: Option<&str>, all: &str| match choice {
            Some(value) => Span::styled(value.to_string(), self.palette.selected),
            None => Span::styled(all.to_string(), self.palette.accent),
        };

        let mut spans = vec![
            Span::styled("Industry ", self.palette.muted),
            Span::styled("[i] ", self.palette.key_hint),
            value(criteria.industry.as_deref(), ALL_INDUSTRIES),
            Span::raw("   "),
            Span::styled("Location ", self.palette.muted),
            Span::styled("[l] ", self.palette.key_hint),
            value(criteria.location.as_deref(), ALL_LOCATIONS),
        ];

        if self.state.has_active_filters() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("[x] ", self.palette.key_hint));
            spans.push(Span::styled("Clear all filters", self.palette.muted));
        }

        Line::from(spans)
    }

    fn sort_line(&self) -> Line<'static> {
        let sort = self.state.sort_spec();
        let view = match self.state.view_mode {
            ViewMode::Cards => "Cards",
            ViewMode::Table => "Table",
        };

        Line::from(vec![
            Span::styled("Sort by ", self.palette.muted),
            Span::styled("[s] ", self.palette.key_hint),
            Span::styled(sort.field.label(), self.palette.accent),
            Span::raw(" "),
            Span::styled("[o] ", self.palette.key_hint),
            Span::styled(
                format!("{} {}", sort.direction.arrow(), sort.direction.label()),
                self.palette.accent,
            ),
            Span::raw("   "),
            Span::styled("View ", self.palette.muted),
            Span::styled("[v] ", self.palette.key_hint),
            Span::styled(view, self.palette.accent),
        ])
    }
}

impl Widget for ControlsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![self.filter_line(), self.sort_line()]).render(area, buf);
    }
}
