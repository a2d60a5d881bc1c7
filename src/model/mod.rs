//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod company;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use company::{Company, CompanyId};
pub use error::{AppError, FetchError};
pub use key_action::KeyAction;
