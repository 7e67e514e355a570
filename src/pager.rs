/// Pager Engine
///
/// Tracks the current page and page size, validates page numbers, and
/// computes the window of page links a pager control shows.
///
/// Pages are 1-based. A table with no records has a page count of zero but
/// still sits on page 1, so page 1 is always a valid page.
///
/// # Examples
///
/// ```
/// use tablestore::{page_count, visible_pages};
///
/// assert_eq!(page_count(100, 25), 4);
/// assert_eq!(page_count(0, 25), 0);
/// assert_eq!(visible_pages(5, 10, 3), vec![4, 5, 6]);
/// assert_eq!(visible_pages(1, 5, 7), vec![1, 2, 3, 4, 5]);
/// ```

use crate::config::{DEFAULT_LIMIT, DEFAULT_MAX_SHOW_PAGE};
use crate::error::TableError;
use serde::Serialize;
use std::ops::Range;

/// Number of pages needed for `total` records at `limit` per page.
pub fn page_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Round an even window size up to the next odd number.
pub fn odd_window(max_show_page: usize) -> usize {
    if max_show_page % 2 == 0 {
        max_show_page + 1
    } else {
        max_show_page
    }
}

/// Contiguous run of page numbers centered on `current`.
///
/// The run holds `min(page_count, max_show_page)` pages and is clamped to
/// `1..=page_count`.
pub fn visible_pages(current: usize, page_count: usize, max_show_page: usize) -> Vec<usize> {
    let window = odd_window(max_show_page).min(page_count);
    if window == 0 {
        return Vec::new();
    }

    let last_start = page_count - window + 1;
    let start = current.saturating_sub(window / 2).clamp(1, last_start);
    (start..start + window).collect()
}

/// Check that `page` is a positive page number within `page_count`.
pub fn validate_page(page: usize, page_count: usize) -> Result<(), TableError> {
    if page == 0 || page > page_count.max(1) {
        return Err(TableError::InvalidPageNumber { page, page_count });
    }
    Ok(())
}

/// Snapshot of pager state for a pager control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerView {
    /// Page links to render
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub page_count: usize,
    /// Whether a "first page" shortcut applies
    pub show_first: bool,
    /// Whether a "last page" shortcut applies
    pub show_last: bool,
}

/// Current page and page size of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    limit: usize,
    max_show_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            current_page: 1,
            limit: DEFAULT_LIMIT,
            max_show_page: DEFAULT_MAX_SHOW_PAGE,
        }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Window size, always odd
    pub fn max_show_page(&self) -> usize {
        self.max_show_page
    }

    /// Change the page size. A zero limit is rejected and the old one kept.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), TableError> {
        if limit == 0 {
            return Err(TableError::InvalidLimit { limit });
        }
        self.limit = limit;
        Ok(())
    }

    pub fn set_max_show_page(&mut self, max_show_page: usize) {
        self.max_show_page = odd_window(max_show_page);
    }

    /// Start on `page`, or on page 1 if `page` is not valid.
    ///
    /// The error is returned after falling back so the caller can report it.
    pub fn open_at(&mut self, page: usize, page_count: usize) -> Result<(), TableError> {
        match validate_page(page, page_count) {
            Ok(()) => {
                self.current_page = page;
                Ok(())
            }
            Err(e) => {
                self.current_page = 1;
                Err(e)
            }
        }
    }

    /// Move to `page`, returning the page that was current before.
    ///
    /// An invalid page leaves the current page untouched.
    pub fn jump(&mut self, page: usize, page_count: usize) -> Result<usize, TableError> {
        validate_page(page, page_count)?;
        let old_page = self.current_page;
        self.current_page = page;
        log::trace!("pager moved from page {} to {}", old_page, page);
        Ok(old_page)
    }

    /// Record positions covered by `page`, clamped to `len` records.
    ///
    /// Pages past the end yield an empty range.
    pub fn page_range(&self, page: usize, len: usize) -> Range<usize> {
        let start = page.saturating_sub(1).saturating_mul(self.limit).min(len);
        let end = start.saturating_add(self.limit).min(len);
        start..end
    }

    pub fn visible_pages(&self, page_count: usize) -> Vec<usize> {
        visible_pages(self.current_page, page_count, self.max_show_page)
    }

    pub fn view(&self, page_count: usize) -> PagerView {
        PagerView {
            pages: self.visible_pages(page_count),
            current_page: self.current_page,
            page_count,
            show_first: page_count > 0 && self.current_page != 1,
            show_last: page_count > 0 && self.current_page != page_count,
        }
    }
}
