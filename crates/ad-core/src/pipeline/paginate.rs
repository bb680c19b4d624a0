//! Page windowing over the ordered view

use std::ops::{Range, RangeInclusive};

/// Rows per table page
pub const ITEMS_PER_PAGE: usize = 50;

/// Width of the numbered page-button window
pub const PAGE_WINDOW: usize = 5;

/// One page of an ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Page being shown, never below 1
    pub current_page: usize,
    /// `ceil(len / page_size)`, 0 for an empty list
    pub total_pages: usize,
    /// First index on the page
    pub start_index: usize,
    /// One past the last index on the page
    pub end_index: usize,
    /// Length of the full list
    pub total_items: usize,
}

impl Page {
    /// Index range of the page, clipped to the list
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages != 0 && self.current_page < self.total_pages
    }

    /// Numbered buttons to show around the current page
    pub fn window(&self) -> RangeInclusive<usize> {
        page_window(self.current_page, self.total_pages)
    }

    /// Slice `items` down to this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_index.min(items.len());
        let start = self.start_index.min(end);
        &items[start..end]
    }
}

/// Window `len` items into pages of `page_size` and pick page `page` (1-based).
///
/// A page past the end yields an empty slice positioned at the end of the
/// list; page 0 is treated as page 1.
pub fn paginate(len: usize, page_size: usize, page: usize) -> Page {
    let page_size = page_size.max(1);
    let current_page = page.max(1);
    let total_pages = len.div_ceil(page_size);

    let start_index = ((current_page - 1) * page_size).min(len);
    let end_index = (current_page * page_size).min(len);

    Page {
        current_page,
        total_pages,
        start_index,
        end_index,
        total_items: len,
    }
}

/// Up to `PAGE_WINDOW` page numbers centred on `current`, clipped to
/// `[1, total_pages]`. Empty when there are no pages.
pub fn page_window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
    let half = PAGE_WINDOW / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (current + half).min(total_pages);
    start..=end
}
