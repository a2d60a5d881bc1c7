//! Sort stage: stable, single-key ordering of records.

use crate::model::Company;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparator over two records, ascending order.
pub type Comparator = fn(&Company, &Company) -> Ordering;

// ===== SortField =====

/// The field a result list is ordered by. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Company name, case-insensitive.
    #[default]
    Name,
    /// Industry label, case-insensitive.
    Industry,
    /// Location, case-insensitive.
    Location,
    /// Head count.
    Employees,
    /// Founding year.
    Founded,
}

impl SortField {
    /// All fields in the order the sort control cycles through them.
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Industry,
        SortField::Location,
        SortField::Employees,
        SortField::Founded,
    ];

    /// Ascending comparator for this field.
    ///
    /// String fields compare case-insensitively, numeric fields numerically.
    pub fn comparator(self) -> Comparator {
        match self {
            SortField::Name => by_name,
            SortField::Industry => by_industry,
            SortField::Location => by_location,
            SortField::Employees => by_employees,
            SortField::Founded => by_founded,
        }
    }

    /// Machine name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Industry => "industry",
            SortField::Location => "location",
            SortField::Employees => "employees",
            SortField::Founded => "founded",
        }
    }

    /// Human label shown in the sort bar.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Industry => "Industry",
            SortField::Location => "Location",
            SortField::Employees => "Employees",
            SortField::Founded => "Founded Year",
        }
    }

    /// Next field in [`SortField::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}' (expected name, industry, location, employees or founded)")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn by_name(a: &Company, b: &Company) -> Ordering {
    cmp_ignore_case(&a.name, &b.name)
}

fn by_industry(a: &Company, b: &Company) -> Ordering {
    cmp_ignore_case(&a.industry, &b.industry)
}

fn by_location(a: &Company, b: &Company) -> Ordering {
    cmp_ignore_case(&a.location, &b.location)
}

fn by_employees(a: &Company, b: &Company) -> Ordering {
    a.employees.cmp(&b.employees)
}

fn by_founded(a: &Company, b: &Company) -> Ordering {
    a.founded.cmp(&b.founded)
}

// ===== SortDirection =====

/// Ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Arrow glyph for the sort bar.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    /// Human label shown in the sort bar.
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

// ===== SortSpec =====

/// Active sort field plus direction. Default: name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    /// Key to order by.
    pub field: SortField,
    /// Order of the key.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Spec for `field` in `direction`.
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two records under this spec.
    pub fn compare(&self, a: &Company, b: &Company) -> Ordering {
        self.direction.apply((self.field.comparator())(a, b))
    }
}

/// Return a new sequence ordered by `spec`.
///
/// The sort is stable: records with equal keys keep their input order in both
/// directions, because descending reverses the comparator rather than the output.
pub fn sort<'a>(records: &[&'a Company], spec: SortSpec) -> Vec<&'a Company> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}
