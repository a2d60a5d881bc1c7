//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Pagination
    /// Show the next page of results. Default: n/→/Page Down
    NextPage,
    /// Show the previous page of results. Default: p/←/Page Up
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,

    // Filters
    /// Start typing a free-text search. Default: //Ctrl+f
    StartSearch,
    /// Cycle the industry filter through "all" and each known industry. Default: i
    CycleIndustry,
    /// Cycle the industry filter backwards. Default: I/Shift+i
    CycleIndustryBack,
    /// Cycle the location filter through "all" and each known location. Default: l
    CycleLocation,
    /// Cycle the location filter backwards. Default: L/Shift+l
    CycleLocationBack,
    /// Remove every active filter. Default: x
    ClearFilters,

    // Sorting
    /// Cycle the sort field: name → industry → location → employees → founded. Default: s
    CycleSortField,
    /// Toggle ascending/descending order. Default: o
    ToggleSortDirection,

    // View
    /// Switch between card grid and table. Default: v
    ToggleViewMode,

    // Application
    /// Re-run the company fetch (only meaningful after a failed load). Default: r
    Retry,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
