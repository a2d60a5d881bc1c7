//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions,
//! plus the fixture records and stub stores the unit tests share.

use crate::config::keybindings::KeyBindings;
use crate::model::{Company, FetchError};
use crate::query::PageSize;
use crate::source::RecordStore;
use crate::state::{AppState, ViewMode};
use crate::view::{TuiApp, TuiError};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep the output compact.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Nine companies across five industries and four locations.
///
/// Sorted by name: ByteWorks, CareBridge, Greenfield Energy, Helios Solar,
/// Ledgerline, Meridian Capital, Northwind Goods, Pixel Forge, Quantum Stack.
pub(crate) fn sample_companies() -> Vec<Company> {
    vec![
        Company::new(1, "Quantum Stack", "Tech", "Berlin", 250, 2015, "Cloud platform for data teams"),
        Company::new(2, "Greenfield Energy", "Energy", "Austin", 1200, 1998, "Wind and solar farm operator"),
        Company::new(3, "Ledgerline", "Finance", "London", 430, 2009, "Payments infrastructure for banks"),
        Company::new(4, "Pixel Forge", "Tech", "Toronto", 85, 2019, "Game engine tooling studio"),
        Company::new(5, "CareBridge", "Healthcare", "Toronto", 640, 2004, "Telehealth platform for clinics"),
        Company::new(6, "Helios Solar", "Energy", "Berlin", 310, 2012, "Rooftop panel installer"),
        Company::new(7, "Northwind Goods", "Retail", "London", 2100, 1987, "Speciality food importer"),
        Company::new(8, "ByteWorks", "Tech", "Austin", 1500, 2001, "Enterprise software consultancy"),
        Company::new(9, "Meridian Capital", "Finance", "Berlin", 95, 2016, "Venture fund for climate startups"),
    ]
}

// ===== Stub stores =====

/// Always returns the same records.
pub(crate) struct FixedStore(pub Vec<Company>);

#[async_trait]
impl RecordStore for FixedStore {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        Ok(self.0.clone())
    }
}

/// Always fails with the given HTTP status.
pub(crate) struct FailingStore(pub u16);

#[async_trait]
impl RecordStore for FailingStore {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        Err(FetchError::Status { status: self.0 })
    }
}

/// Fails the first `failures` calls, then serves the sample companies.
///
/// The call counter is shared so a test can keep a handle after boxing the store.
pub(crate) struct FlakyStore {
    failures: usize,
    calls: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub(crate) fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                failures,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(FetchError::Transport("connection refused".to_string()))
        } else {
            Ok(sample_companies())
        }
    }
}

// ===== TuiHarness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub(crate) struct TuiHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl TuiHarness {
    /// Harness over the sample companies, 120x40, page size 4, not yet loaded.
    pub(crate) fn new() -> Result<Self, TuiError> {
        Self::with_store(Box::new(FixedStore(sample_companies())), 120, 40)
    }

    /// Harness over any store, with custom terminal size. Call [`Self::load`]
    /// to run the initial fetch.
    pub(crate) fn with_store(
        store: Box<dyn RecordStore>,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let page_size = PageSize::new(4).expect("non-zero page size");
        let app_state = AppState::new(page_size, ViewMode::Cards);
        let app = TuiApp::new_for_test(terminal, app_state, store, KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Run a pending fetch, as the event loop does after drawing.
    pub(crate) fn load(&mut self) {
        self.app.load_test();
    }

    /// Whether a retry was requested and has not been run yet.
    pub(crate) fn load_pending(&self) -> bool {
        self.app.is_load_pending()
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub(crate) fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub(crate) fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub(crate) fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
