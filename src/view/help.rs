//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key column entries, grouped under category headers.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            ("n/→/PgDn", "Next page"),
            ("p/←/PgUp", "Previous page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Edit search text"),
            ("Enter", "Keep search and leave the box"),
            ("Esc", "Clear search and leave the box"),
        ],
    ),
    (
        "Filters",
        &[
            ("i / I", "Next / previous industry"),
            ("l / L", "Next / previous location"),
            ("x", "Clear all filters"),
        ],
    ),
    (
        "Sorting and view",
        &[
            ("s", "Cycle sort field"),
            ("o", "Toggle ascending / descending"),
            ("v", "Toggle cards / table"),
        ],
    ),
    (
        "Application",
        &[
            ("r", "Retry after a failed load"),
            ("?", "Show help overlay"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.border_focused),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let desc_style = Style::default();
    let mut lines = Vec::new();

    for (i, (category, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*category, palette.accent)));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), palette.key_hint),
                Span::styled(*desc, desc_style),
            ]));
        }
    }

    lines
}

// ===== Tests =====
