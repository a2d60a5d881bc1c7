//! HTTP record store: one `GET {base_url}/companies`.

use super::RecordStore;
use crate::model::{Company, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches the company list from the directory server.
///
/// No retries: a failed request is reported once and the caller decides what
/// to do with it.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    /// Create a store for `base_url` (e.g. `http://localhost:3001`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("compdir/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Full URL of the company list endpoint.
    pub fn companies_url(&self) -> String {
        format!("{}/companies", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        let url = self.companies_url();
        debug!(%url, "Fetching companies");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let companies: Vec<Company> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        info!(count = companies.len(), %url, "Fetched companies");
        Ok(companies)
    }
}
