//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive `TuiApp<TestBackend>` through the test harness,
//! the same way a user drives the real terminal.
