//! Companies Directory (compdir)
//!
//! TUI application for browsing a directory of companies fetched from an
//! HTTP server.
//!
//! The crate follows a Pure Core / Impure Shell split: `model` and `query`
//! are pure data and functions, `state` holds the user's choices, and
//! `source` and `view` do the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
