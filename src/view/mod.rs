//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod company_cards;
mod company_table;
mod controls;
mod help;
mod helpers;
mod layout;
mod screens;
mod search_input;
mod styles;

pub use company_cards::CardGrid;
pub use company_table::CompanyTable;
pub use controls::{ControlsBar, ALL_INDUSTRIES, ALL_LOCATIONS};
pub use help::render_help_overlay;
pub use helpers::format_thousands;
pub use layout::{render_layout, RenderContext};
pub use search_input::SearchBox;
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::{AppError, KeyAction};
use crate::query::SortSpec;
use crate::source::{build_store, RecordStore};
use crate::state::{search_input_handler, AppState, Focus, LoadState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The async runtime used for fetching could not be started
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Current-thread runtime that drives the fetch with `block_on`.
fn fetch_runtime() -> Result<Runtime, TuiError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(TuiError::Runtime)
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    store: Box<dyn RecordStore>,
    runtime: Runtime,
    key_bindings: KeyBindings,
    palette: Palette,
    api_url: String,
    /// Set by the retry action; the run loop fetches after the next draw.
    pending_load: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        store: Box<dyn RecordStore>,
        runtime: Runtime,
        palette: Palette,
        api_url: String,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            store,
            runtime,
            key_bindings: KeyBindings::default(),
            palette,
            api_url,
            pending_load: true,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Shows the loading screen, fetches once, then redraws after every key
    /// or resize until the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        self.load_if_pending();
        self.draw()?;

        loop {
            match event::read()? {
                // Ignore release/repeat events reported by some terminals
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;

                    if self.pending_load {
                        self.load_if_pending();
                        self.draw()?;
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Fetch the collection if a load was requested. Blocks until it finishes.
    fn load_if_pending(&mut self) {
        if !self.pending_load {
            return;
        }
        self.pending_load = false;
        self.app_state.begin_load();

        let result = self.runtime.block_on(self.store.fetch_companies());
        self.app_state.finish_load(result);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even while typing a search
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay swallows everything except close and quit
        if self.app_state.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => {
                    self.app_state.help_visible = false;
                    false
                }
                KeyCode::Char('q') => true,
                _ => false,
            };
        }

        if self.app_state.focus == Focus::Search {
            self.handle_search_key(key);
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        // Until records are ready only the application controls apply
        if self.app_state.load_state() != &LoadState::Ready
            && !matches!(action, KeyAction::Retry | KeyAction::Help | KeyAction::Quit)
        {
            return false;
        }

        self.dispatch(action)
    }

    /// Keys while the search box has focus. Edits apply immediately.
    fn handle_search_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Enter => state.finish_search(),
            KeyCode::Esc => {
                state.set_search_text("");
                state.finish_search();
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                state.edit_search(|input| search_input_handler::handle_char_input(input, ch));
            }
            KeyCode::Backspace => state.edit_search(search_input_handler::handle_backspace),
            KeyCode::Left => state.edit_search(search_input_handler::handle_cursor_left),
            KeyCode::Right => state.edit_search(search_input_handler::handle_cursor_right),
            KeyCode::Home => state.edit_search(search_input_handler::handle_cursor_home),
            KeyCode::End => state.edit_search(search_input_handler::handle_cursor_end),
            _ => {}
        }
    }

    /// Apply a bound action. Returns true on quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::Quit => return true,

            KeyAction::NextPage => state.next_page(),
            KeyAction::PrevPage => state.prev_page(),
            KeyAction::FirstPage => state.first_page(),
            KeyAction::LastPage => state.last_page(),

            KeyAction::StartSearch => state.start_search(),

            KeyAction::CycleIndustry => state.cycle_industry(true),
            KeyAction::CycleIndustryBack => state.cycle_industry(false),
            KeyAction::CycleLocation => state.cycle_location(true),
            KeyAction::CycleLocationBack => state.cycle_location(false),
            KeyAction::ClearFilters => state.clear_filters(),

            KeyAction::CycleSortField => state.cycle_sort_field(),
            KeyAction::ToggleSortDirection => state.toggle_sort_direction(),
            KeyAction::ToggleViewMode => state.toggle_view_mode(),

            KeyAction::Retry => {
                if state.can_retry() {
                    info!("Retrying company fetch");
                    state.begin_load();
                    self.pending_load = true;
                }
            }
            KeyAction::Help => state.toggle_help(),
        }
        false
    }

    /// Render the current frame
    ///
    /// The page size is fitted to the terminal first so every record on the
    /// page is drawn.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.app_state
            .fit_page_to(layout::page_capacity(self.app_state.view_mode, size.height));

        let ctx = RenderContext::new(&self.palette, &self.api_url);
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state, &ctx);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips raw mode and the alternate screen. The first load still has to
    /// be triggered with [`TuiApp::load_test`].
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        store: Box<dyn RecordStore>,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            store,
            runtime: fetch_runtime().expect("test runtime"),
            key_bindings,
            palette: Palette::new(ColorConfig::enabled()),
            api_url: "http://test.invalid".to_string(),
            pending_load: true,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Run the fetch the way the event loop would, if one is pending.
    pub(crate) fn load_test(&mut self) {
        self.load_if_pending();
    }

    pub(crate) fn is_load_pending(&self) -> bool {
        self.pending_load
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup choices from the command line that seed `AppState`.
///
/// Lives in the view module because it configures the shell's initial
/// state, not the domain logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Initial free-text search.
    pub search: Option<String>,
    /// Initial industry filter.
    pub industry: Option<String>,
    /// Initial location filter.
    pub location: Option<String>,
    /// Initial sort.
    pub sort: SortSpec,
    /// `--no-color` was given.
    pub no_color: bool,
}

impl CliArgs {
    /// Initial state for the resolved config and these arguments.
    pub fn initial_state(&self, config: &ResolvedConfig) -> AppState {
        let mut state = AppState::new(config.page_size, config.view_mode);
        if let Some(search) = &self.search {
            state.set_search_text(search);
        }
        state.set_industry(self.industry.clone());
        state.set_location(self.location.clone());
        state.set_sort(self.sort);
        state
    }
}

/// Initialize and run the TUI application
///
/// Builds the record store and fetch runtime before touching the terminal,
/// runs the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, args: CliArgs) -> Result<(), TuiError> {
    let store = build_store(config).map_err(AppError::from)?;
    let runtime = fetch_runtime()?;
    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));
    let state = args.initial_state(config);

    info!(
        api_url = %config.api_base_url,
        policy = %config.fetch_policy,
        "Starting directory"
    );

    let mut app = TuiApp::new(state, store, runtime, palette, config.api_base_url.clone())?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
