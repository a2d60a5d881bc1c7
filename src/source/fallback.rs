//! Bundled static dataset and the lenient store that substitutes it on failure.

use super::RecordStore;
use crate::model::{Company, FetchError};
use async_trait::async_trait;
use tracing::warn;

/// The bundled company list. Same shape as the `/companies` response.
pub fn fallback_companies() -> Vec<Company> {
    vec![
        Company::new(
            1,
            "TechCorp Solutions",
            "Technology",
            "San Francisco, CA",
            1200,
            2010,
            "Enterprise software and cloud infrastructure provider.",
        ),
        Company::new(
            2,
            "GreenLeaf Energy",
            "Energy",
            "Austin, TX",
            340,
            2015,
            "Residential solar installations and battery storage.",
        ),
        Company::new(
            3,
            "MediCare Plus",
            "Healthcare",
            "Boston, MA",
            2500,
            1998,
            "Network of outpatient clinics and telehealth services.",
        ),
        Company::new(
            4,
            "FinanceHub",
            "Finance",
            "New York, NY",
            860,
            2005,
            "Digital banking platform for small businesses.",
        ),
        Company::new(
            5,
            "RetailMax",
            "Retail",
            "Chicago, IL",
            4300,
            1987,
            "Regional chain of home and garden stores.",
        ),
        Company::new(
            6,
            "DataStream Analytics",
            "Technology",
            "Seattle, WA",
            210,
            2018,
            "Real-time analytics pipelines for product teams.",
        ),
        Company::new(
            7,
            "EduLearn",
            "Education",
            "Boston, MA",
            150,
            2016,
            "Online courses and tutoring for high school students.",
        ),
        Company::new(
            8,
            "AutoDrive Systems",
            "Automotive",
            "Detroit, MI",
            980,
            2012,
            "Driver assistance sensors and software.",
        ),
        Company::new(
            9,
            "CloudNine Hosting",
            "Technology",
            "Austin, TX",
            75,
            2020,
            "Managed hosting for small web shops.",
        ),
        Company::new(
            10,
            "BioGenix Labs",
            "Healthcare",
            "San Diego, CA",
            430,
            2008,
            "Contract research for biotech startups.",
        ),
        Company::new(
            11,
            "UrbanBuild",
            "Construction",
            "Chicago, IL",
            1600,
            1995,
            "Commercial construction and renovation.",
        ),
        Company::new(
            12,
            "SecureNet",
            "Technology",
            "New York, NY",
            520,
            2011,
            "Network security monitoring for mid-size companies.",
        ),
    ]
}

/// Serves the bundled dataset. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecordStore;

#[async_trait]
impl RecordStore for StaticRecordStore {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        Ok(fallback_companies())
    }
}

/// Lenient store: any failure of `inner` is replaced by the bundled dataset.
///
/// The shell never observes a fetch failure through this store.
#[derive(Debug, Clone)]
pub struct FallbackRecordStore<S> {
    inner: S,
}

impl<S> FallbackRecordStore<S> {
    /// Wrap `inner`, usually the HTTP store.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: RecordStore> RecordStore for FallbackRecordStore<S> {
    async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        match self.inner.fetch_companies().await {
            Ok(companies) => Ok(companies),
            Err(error) => {
                warn!(%error, "Company fetch failed, using bundled dataset");
                Ok(fallback_companies())
            }
        }
    }
}
