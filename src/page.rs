//! Page - the derived result of a list pipeline.

use serde::Serialize;

/// One page of a processed list plus pagination metadata.
///
/// `total_items` and `total_pages` describe the whole processed list, not
/// just this page. A page past `total_pages` has empty `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Page<T> {
    /// Build page metadata for a processed list of `total_items` items.
    ///
    /// `page` and `page_size` are expected to be at least 1.
    pub(crate) fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(page_size);
        Self {
            items,
            page,
            page_size,
            total_pages,
            total_items,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }

    /// Check if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 1-based inclusive bounds of this page within the whole list,
    /// for "showing 21-40 of 95" labels.
    ///
    /// Returns `None` for an empty page.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page - 1) * self.page_size + 1;
        Some((start, start + self.items.len() - 1))
    }
}
