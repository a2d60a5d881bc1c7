//! Pagination stage and page metadata.

use std::num::NonZeroUsize;

/// Number of records per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Nine cards fill a three-column grid.
    pub const DEFAULT: PageSize = PageSize(match NonZeroUsize::new(9) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Smart constructor: returns None for zero.
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// The size as a plain count.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of pages needed to show `total` records (0 when there are none).
pub fn total_pages(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// Return the window `[(page-1)*size, page*size)` of `items`, clamped to bounds.
///
/// Pages are 1-based. Page 0 and pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Pagination metadata for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Requested page number (1-based).
    pub page: usize,

    /// Number of items per page.
    pub page_size: PageSize,

    /// Total number of items (after filters).
    pub total: usize,

    /// Total number of pages.
    pub total_pages: usize,

    /// Whether there is a next page.
    pub has_next: bool,

    /// Whether there is a previous page.
    pub has_prev: bool,
}

impl PageInfo {
    /// Metadata for `page` of a collection of `total` records.
    pub fn new(page: usize, page_size: PageSize, total: usize) -> Self {
        let total_pages = total_pages(total, page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
