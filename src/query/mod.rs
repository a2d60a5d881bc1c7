//! Query pipeline (pure).
//!
//! `filter` → `sort` → `paginate`, composed by [`execute`]. Every stage borrows
//! the records and never mutates them. All stages are total functions.

pub mod facets;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use facets::{cycle_choice, Facets};
pub use filter::{filter, FilterCriteria, SearchText};
pub use paginate::{paginate, total_pages, PageInfo, PageSize};
pub use sort::{sort, SortDirection, SortField, SortSpec, UnknownSortField};

use crate::model::Company;

/// Everything needed to produce one displayed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Which records survive.
    pub criteria: FilterCriteria,
    /// Order of the survivors.
    pub sort: SortSpec,
    /// 1-based page number.
    pub page: usize,
    /// Records per page.
    pub page_size: PageSize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

/// One page of results plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Records on the requested page, in sorted order.
    pub items: Vec<&'a Company>,
    /// Totals for the filtered collection.
    pub info: PageInfo,
}

/// Run the full pipeline over `records`.
pub fn execute<'a>(records: &'a [Company], query: &Query) -> QueryResult<'a> {
    let filtered = filter(records, &query.criteria);
    let sorted = sort(&filtered, query.sort);
    let items = paginate(&sorted, query.page, query.page_size).to_vec();
    let info = PageInfo::new(query.page, query.page_size, sorted.len());

    QueryResult { items, info }
}
