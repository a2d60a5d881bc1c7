//! Company record sources.
//!
//! This module provides the stores the shell loads its collection from:
//! - HTTP store for the live directory server
//! - Static store serving the bundled dataset
//! - Fallback wrapper that masks failures with the bundled dataset
//!
//! Which composition is used is decided once, by [`FetchPolicy`].

use crate::config::ResolvedConfig;
use crate::model::{Company, FetchError};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub mod fallback;
pub mod http;

pub use fallback::{fallback_companies, FallbackRecordStore, StaticRecordStore};
pub use http::HttpRecordStore;

/// Something that can produce the full company collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every company. Called once at startup and again on retry.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the collection could not be obtained.
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError>;
}

/// What to do when the live fetch fails.
///
/// The two policies are mutually exclusive and visibly different on backend outage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPolicy {
    /// Show an error screen with a retry action. Records stay empty.
    #[default]
    Strict,
    /// Quietly substitute the bundled dataset.
    Fallback,
}

impl FetchPolicy {
    /// Name used in flags, env and the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            FetchPolicy::Strict => "strict",
            FetchPolicy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for FetchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized fetch policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fetch policy '{0}' (expected strict or fallback)")]
pub struct UnknownFetchPolicy(pub String);

impl FromStr for FetchPolicy {
    type Err = UnknownFetchPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(FetchPolicy::Strict),
            "fallback" => Ok(FetchPolicy::Fallback),
            other => Err(UnknownFetchPolicy(other.to_string())),
        }
    }
}

/// Build the store for the resolved configuration.
///
/// # Behavior:
/// - Strict: the HTTP store as-is
/// - Fallback: the HTTP store wrapped in [`FallbackRecordStore`]; if the HTTP
///   client itself cannot be built, the static store
///
/// # Errors
///
/// Returns `FetchError::Client` under the strict policy when the HTTP client
/// cannot be built.
pub fn build_store(config: &ResolvedConfig) -> Result<Box<dyn RecordStore>, FetchError> {
    let http = HttpRecordStore::new(config.api_base_url.clone(), config.request_timeout);

    match (config.fetch_policy, http) {
        (FetchPolicy::Strict, Ok(store)) => Ok(Box::new(store)),
        (FetchPolicy::Strict, Err(e)) => Err(e),
        (FetchPolicy::Fallback, Ok(store)) => Ok(Box::new(FallbackRecordStore::new(store))),
        (FetchPolicy::Fallback, Err(error)) => {
            warn!(%error, "HTTP client unavailable, serving bundled dataset");
            Ok(Box::new(StaticRecordStore))
        }
    }
}
