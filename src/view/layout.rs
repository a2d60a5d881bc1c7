//! Screen layout.
//!
//! Pure layout logic: splits the frame into the directory's bands and
//! renders each one from `AppState`.

use crate::query::QueryResult;
use crate::state::{AppState, Focus, LoadState, ViewMode};
use crate::view::company_cards::CardGrid;
use crate::view::company_table::CompanyTable;
use crate::view::constants::{
    CARD_COLUMNS, CONTROLS_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, MIN_CARD_HEIGHT,
    PAGINATION_HEIGHT, RESULT_COUNT_HEIGHT, SEARCH_BOX_HEIGHT, TABLE_CHROME_HEIGHT,
};
use crate::view::controls::ControlsBar;
use crate::view::search_input::SearchBox;
use crate::view::styles::Palette;
use crate::view::{help, screens};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Lines left for the cards or table once every fixed band is placed.
fn content_height(frame_height: u16) -> u16 {
    frame_height.saturating_sub(
        HEADER_HEIGHT
            + SEARCH_BOX_HEIGHT
            + CONTROLS_HEIGHT
            + RESULT_COUNT_HEIGHT
            + PAGINATION_HEIGHT
            + FOOTER_HEIGHT,
    )
}

/// Most companies one page can show in a frame `frame_height` lines tall.
///
/// Cards count whole rows at [`MIN_CARD_HEIGHT`]. The table loses its
/// borders and header to [`TABLE_CHROME_HEIGHT`]. Never less than 1.
pub fn page_capacity(view_mode: ViewMode, frame_height: u16) -> usize {
    let content = content_height(frame_height);
    match view_mode {
        ViewMode::Cards => usize::from((content / MIN_CARD_HEIGHT).max(1)) * CARD_COLUMNS,
        ViewMode::Table => usize::from(content.saturating_sub(TABLE_CHROME_HEIGHT).max(1)),
    }
}

/// What the frame needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Styles for every widget.
    pub palette: &'a Palette,
    /// Shown on the loading screen.
    pub api_url: &'a str,
    /// Year printed in the footer.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    /// Context stamped with the current local year.
    pub fn new(palette: &'a Palette, api_url: &'a str) -> Self {
        Self {
            palette,
            api_url,
            year: chrono::Local::now().year(),
        }
    }
}

/// Render one frame for the current load state, plus the help overlay if open.
pub fn render_layout(frame: &mut Frame, state: &AppState, ctx: &RenderContext<'_>) {
    match state.load_state() {
        LoadState::Loading => screens::render_loading(frame, ctx.palette, ctx.api_url),
        LoadState::Failed { reason } => {
            screens::render_error(frame, ctx.palette, reason, state.can_retry())
        }
        LoadState::Ready => render_directory(frame, state, ctx),
    }

    if state.help_visible {
        help::render_help_overlay(frame, ctx.palette);
    }
}

fn render_directory(frame: &mut Frame, state: &AppState, ctx: &RenderContext<'_>) {
    let [header, search, controls, count, content, pagination, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SEARCH_BOX_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Length(RESULT_COUNT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(PAGINATION_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    let page = state.current_page();

    render_header(frame, header, state, ctx.palette);
    frame.render_widget(
        SearchBox::new(state.search_input(), state.focus == Focus::Search, ctx.palette),
        search,
    );
    frame.render_widget(ControlsBar::new(state, ctx.palette), controls);
    render_result_count(frame, count, &page, ctx.palette);
    render_content(frame, content, state.view_mode, &page, ctx.palette);
    render_pagination(frame, pagination, &page, ctx.palette);
    render_footer(frame, footer, ctx);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled("Companies Directory", palette.title)),
        Line::from(Span::styled(
            format!(
                "Browse and filter through {} companies",
                state.records().len()
            ),
            palette.muted,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// "Showing N of M companies": N on this page, M after filtering.
fn render_result_count(frame: &mut Frame, area: Rect, page: &QueryResult<'_>, palette: &Palette) {
    let line = Line::from(vec![
        Span::raw("Showing "),
        Span::styled(page.items.len().to_string(), palette.title),
        Span::raw(" of "),
        Span::styled(page.info.total.to_string(), palette.title),
        Span::raw(" companies"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    view_mode: ViewMode,
    page: &QueryResult<'_>,
    palette: &Palette,
) {
    if page.info.total == 0 {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No companies found", palette.title)),
            Line::from(Span::styled(
                "Try adjusting your filters to see more results",
                palette.muted,
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
        return;
    }

    match view_mode {
        ViewMode::Cards => frame.render_widget(CardGrid::new(&page.items, palette), area),
        ViewMode::Table => frame.render_widget(CompanyTable::new(&page.items, palette), area),
    }
}

/// Hidden when there is nothing to page through.
fn render_pagination(frame: &mut Frame, area: Rect, page: &QueryResult<'_>, palette: &Palette) {
    let info = &page.info;
    if info.total_pages == 0 {
        return;
    }

    let enabled = |on: bool| if on { palette.key_hint } else { palette.muted };

    let line = Line::from(vec![
        Span::styled("◀ Prev [p]", enabled(info.has_prev)),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", info.page, info.total_pages),
            palette.title,
        ),
        Span::raw("   "),
        Span::styled("[n] Next ▶", enabled(info.has_next)),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let line = Line::from(vec![
        Span::styled(
            format!("Companies Directory © {}", ctx.year),
            ctx.palette.muted,
        ),
        Span::raw(" | "),
        Span::styled("?", ctx.palette.key_hint),
        Span::styled(" help  ", ctx.palette.muted),
        Span::styled("q", ctx.palette.key_hint),
        Span::styled(" quit", ctx.palette.muted),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
