//! Application state and transitions.
//!
//! AppState owns the loaded collection and every UI choice that feeds the
//! query pipeline. All transitions are plain methods with no I/O, following
//! the Elm architecture: the shell performs effects and reports results back.

use crate::model::{Company, FetchError};
use crate::query::{
    self, cycle_choice, filter, total_pages, Facets, FilterCriteria, PageSize, Query,
    QueryResult, SearchText, SortDirection, SortField, SortSpec,
};
use crate::state::search_input_handler::SearchInput;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

// ===== LoadState =====

/// Lifecycle of the company collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A fetch is in flight (initial state).
    #[default]
    Loading,
    /// Records are available (possibly zero of them).
    Ready,
    /// The last fetch failed. Records are empty until a retry succeeds.
    Failed {
        /// Error text shown on the error screen.
        reason: String,
    },
}

// ===== ViewMode =====

/// How the current page is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Grid of cards, three per row.
    #[default]
    Cards,
    /// One row per company.
    Table,
}

impl ViewMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Cards => ViewMode::Table,
            ViewMode::Table => ViewMode::Cards,
        }
    }

    /// Name used on the command line and in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Table => "table",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized view mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}' (expected cards or table)")]
pub struct UnknownViewMode(pub String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cards" => Ok(ViewMode::Cards),
            "table" => Ok(ViewMode::Table),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

// ===== Focus =====

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys are looked up in the key bindings.
    #[default]
    Browse,
    /// Printable keys edit the search box.
    Search,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Invariants
///
/// - `records` is only replaced by [`AppState::finish_load`]
/// - `facets` is always derived from the full `records`, never the filtered view
/// - Any change to filter criteria or sort resets the page to 1
/// - Page navigation keeps the page within `1..=max(total_pages, 1)`
#[derive(Debug, Clone)]
pub struct AppState {
    records: Vec<Company>,
    facets: Facets,
    load: LoadState,

    /// Criteria, sort, page and page size fed to [`query::execute`].
    ///
    /// `query.page_size` is the size in effect: the configured size, capped
    /// by what the terminal can show.
    query: Query,

    /// Page size chosen by config or CLI.
    configured_page_size: PageSize,

    /// Editable text of the search box. Its text mirrors `query.criteria.query`.
    search_input: SearchInput,

    /// Card grid or table.
    pub view_mode: ViewMode,

    /// Which input receives keystrokes.
    pub focus: Focus,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PageSize::default(), ViewMode::default())
    }
}

impl AppState {
    /// Fresh state: loading, no records, default criteria and sort, page 1.
    pub fn new(page_size: PageSize, view_mode: ViewMode) -> Self {
        Self {
            records: Vec::new(),
            facets: Facets::default(),
            load: LoadState::Loading,
            query: Query {
                page_size,
                ..Query::default()
            },
            configured_page_size: page_size,
            search_input: SearchInput::default(),
            view_mode,
            focus: Focus::Browse,
            help_visible: false,
        }
    }

    // ----- accessors -----

    /// The full loaded collection, unfiltered.
    pub fn records(&self) -> &[Company] {
        &self.records
    }

    /// Where the collection is in its fetch lifecycle.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Active filters.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.query.criteria
    }

    /// Active sort.
    pub fn sort_spec(&self) -> SortSpec {
        self.query.sort
    }

    /// 1-based current page.
    pub fn page(&self) -> usize {
        self.query.page
    }

    /// Records per page right now. Never more than the configured size.
    pub fn page_size(&self) -> PageSize {
        self.query.page_size
    }

    /// Page size chosen at startup, before any fitting to the screen.
    pub fn configured_page_size(&self) -> PageSize {
        self.configured_page_size
    }

    /// Search box text and cursor.
    pub fn search_input(&self) -> &SearchInput {
        &self.search_input
    }

    /// Distinct industries and locations of the full collection.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Run the pipeline for the page currently on screen.
    pub fn current_page(&self) -> QueryResult<'_> {
        query::execute(&self.records, &self.query)
    }

    /// Number of records surviving the current filter.
    pub fn filtered_count(&self) -> usize {
        filter(&self.records, &self.query.criteria).len()
    }

    /// Pages needed for the filtered records at the current page size.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.query.page_size)
    }

    // ----- loading -----

    /// Mark a fetch as in flight.
    pub fn begin_load(&mut self) {
        debug!("Begin loading companies");
        self.load = LoadState::Loading;
    }

    /// Record the outcome of a fetch.
    ///
    /// Success replaces the collection, recomputes facets and resets to page 1.
    /// Failure leaves the collection empty and keeps the reason for display.
    pub fn finish_load(&mut self, result: Result<Vec<Company>, FetchError>) {
        match result {
            Ok(companies) => {
                info!(count = companies.len(), "Companies loaded");
                self.facets = Facets::from_records(&companies);
                self.records = companies;
                self.load = LoadState::Ready;
                self.query.page = 1;
            }
            Err(error) => {
                warn!(%error, "Company load failed");
                self.records.clear();
                self.facets = Facets::default();
                self.load = LoadState::Failed {
                    reason: error.to_string(),
                };
            }
        }
    }

    /// Retry is offered only after a failed load.
    pub fn can_retry(&self) -> bool {
        matches!(self.load, LoadState::Failed { .. })
    }

    // ----- filters -----

    /// Replace the search text; `""` clears it. Cursor moves to the end.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_input = SearchInput::with_text(text);
        self.sync_search_criteria();
    }

    /// Apply an edit to the search box, re-filtering if the text changed.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchInput) -> SearchInput) {
        let before = self.search_input.clone();
        self.search_input = edit(before.clone());
        if self.search_input.text() != before.text() {
            self.sync_search_criteria();
        }
    }

    fn sync_search_criteria(&mut self) {
        self.query.criteria.query = SearchText::new(self.search_input.text());
        self.reset_page();
    }

    /// `None` means all industries.
    pub fn set_industry(&mut self, industry: Option<String>) {
        self.query.criteria.industry = industry.filter(|s| !s.is_empty());
        self.reset_page();
    }

    /// `None` means all locations.
    pub fn set_location(&mut self, location: Option<String>) {
        self.query.criteria.location = location.filter(|s| !s.is_empty());
        self.reset_page();
    }

    /// Step the industry filter through "all" and each facet value.
    pub fn cycle_industry(&mut self, forward: bool) {
        let next = cycle_choice(
            &self.facets.industries,
            self.query.criteria.industry.as_deref(),
            forward,
        );
        self.set_industry(next);
    }

    /// Step the location filter through "all" and each facet value.
    pub fn cycle_location(&mut self, forward: bool) {
        let next = cycle_choice(
            &self.facets.locations,
            self.query.criteria.location.as_deref(),
            forward,
        );
        self.set_location(next);
    }

    /// Drop every filter, including the search text.
    pub fn clear_filters(&mut self) {
        self.search_input = SearchInput::default();
        self.query.criteria = FilterCriteria::default();
        self.reset_page();
    }

    /// Whether the "clear filters" action is meaningful.
    pub fn has_active_filters(&self) -> bool {
        !self.query.criteria.is_empty()
    }

    // ----- sorting -----

    /// Replace field and direction at once.
    pub fn set_sort(&mut self, spec: SortSpec) {
        self.query.sort = spec;
        self.reset_page();
    }

    /// Sort by `field`, keeping the direction.
    pub fn set_sort_field(&mut self, field: SortField) {
        self.query.sort.field = field;
        self.reset_page();
    }

    /// Keep the field, change the direction.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.query.sort.direction = direction;
        self.reset_page();
    }

    /// Flip between ascending and descending.
    pub fn toggle_sort_direction(&mut self) {
        self.set_sort_direction(self.query.sort.direction.toggle());
    }

    /// Step to the next sort field, wrapping around.
    pub fn cycle_sort_field(&mut self) {
        self.set_sort_field(self.query.sort.field.next());
    }

    // ----- pagination -----

    fn reset_page(&mut self) {
        self.query.page = 1;
    }

    fn last_page_number(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Stays on the last page.
    pub fn next_page(&mut self) {
        self.query.page = (self.query.page + 1).min(self.last_page_number());
    }

    /// Stays on page 1.
    pub fn prev_page(&mut self) {
        self.query.page = self.query.page.saturating_sub(1).max(1);
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) {
        self.reset_page();
    }

    /// Jump to the last page, or page 1 when nothing matches.
    pub fn last_page(&mut self) {
        self.query.page = self.last_page_number();
    }

    /// Cap the page size at `capacity` records, the most the screen can show.
    ///
    /// The configured size is restored once the screen grows back. When the
    /// size changes, the page moves so the first record on screen stays on it.
    pub fn fit_page_to(&mut self, capacity: usize) {
        let wanted = self.configured_page_size.get().min(capacity.max(1));
        let Some(fitted) = PageSize::new(wanted) else {
            return;
        };
        let current = self.query.page_size;
        if fitted == current {
            return;
        }

        let first_index = (self.query.page.max(1) - 1) * current.get();
        self.query.page_size = fitted;
        self.query.page = (first_index / fitted.get() + 1).min(self.last_page_number());
        debug!(
            from = current.get(),
            to = fitted.get(),
            page = self.query.page,
            "Page size fitted to screen"
        );
    }

    // ----- presentation -----

    /// Switch between cards and table. The page is kept.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Focus the search box, keeping its current text.
    pub fn start_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Return keystrokes to the key bindings. The search stays applied.
    pub fn finish_search(&mut self) {
        self.focus = Focus::Browse;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
