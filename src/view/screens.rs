//! Full-screen loading and error panels.

use crate::view::constants::{MESSAGE_PANEL_HEIGHT, MESSAGE_PANEL_WIDTH_PERCENT};
use crate::view::helpers::{centered_rect_with_height, empty_line};
use crate::view::styles::Palette;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_loading(frame: &mut Frame, palette: &Palette, api_url: &str) {
    let area = centered_rect_with_height(MESSAGE_PANEL_WIDTH_PERCENT, MESSAGE_PANEL_HEIGHT, frame.area());

    let lines = vec![
        empty_line(),
        Line::from(Span::styled("Loading companies…", palette.title)),
        empty_line(),
        Line::from(Span::styled(api_url.to_string(), palette.muted)),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" Companies Directory "),
        );

    frame.render_widget(panel, area);
}

/// Failure panel with the reason and, when a retry is possible, its key.
pub fn render_error(frame: &mut Frame, palette: &Palette, reason: &str, can_retry: bool) {
    let area = centered_rect_with_height(MESSAGE_PANEL_WIDTH_PERCENT, MESSAGE_PANEL_HEIGHT, frame.area());

    let mut lines = vec![
        empty_line(),
        Line::from(Span::styled("Oops! Something went wrong", palette.error)),
        empty_line(),
        Line::from(reason.to_string()),
        empty_line(),
    ];
    if can_retry {
        lines.push(Line::from(vec![
            Span::styled("[r] ", palette.key_hint),
            Span::raw("Try again   "),
            Span::styled("[q] ", palette.key_hint),
            Span::raw("Quit"),
        ]));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.error),
        );

    frame.render_widget(panel, area);
}
