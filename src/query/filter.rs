//! Filter stage: keeps the records matching every active criterion.

use crate::model::Company;

// ===== SearchText =====

/// Free-text search term. Never empty.
///
/// Smart constructor enforces the non-empty invariant, so an absent search is
/// always `None` rather than an empty string. Whitespace is a real search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText {
    raw: String,
    lowered: String,
}

impl SearchText {
    /// Returns None if `raw` is empty.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            let lowered = raw.to_lowercase();
            Some(Self { raw, lowered })
        }
    }

    /// The term as typed by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test.
    pub fn is_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.lowered)
    }
}

// ===== FilterCriteria =====

/// Three independent, optional predicates. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Matched against name OR description, case-insensitively.
    pub query: Option<SearchText>,
    /// Exact, case-sensitive industry match.
    pub industry: Option<String>,
    /// Exact, case-sensitive location match.
    pub location: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw text inputs where `""` means "no constraint".
    pub fn from_raw(query: &str, industry: &str, location: &str) -> Self {
        Self {
            query: SearchText::new(query),
            industry: non_empty(industry),
            location: non_empty(location),
        }
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.industry.is_none() && self.location.is_none()
    }

    /// Check a single record against all active criteria.
    pub fn matches(&self, company: &Company) -> bool {
        let matches_search = self
            .query
            .as_ref()
            .is_none_or(|q| q.is_in(&company.name) || q.is_in(&company.description));

        let matches_industry = self
            .industry
            .as_deref()
            .is_none_or(|industry| company.industry == industry);

        let matches_location = self
            .location
            .as_deref()
            .is_none_or(|location| company.location == location);

        matches_search && matches_industry && matches_location
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Return the subsequence of `records` matching `criteria`, in input order.
pub fn filter<'a>(records: &'a [Company], criteria: &FilterCriteria) -> Vec<&'a Company> {
    records.iter().filter(|c| criteria.matches(c)).collect()
}
