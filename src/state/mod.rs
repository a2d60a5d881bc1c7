//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::{AppState, Focus, LoadState, UnknownViewMode, ViewMode};
pub use search_input_handler::SearchInput;
