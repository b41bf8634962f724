//! List configuration.
//!
//! [`ListConfig`] is the single aggregate value that drives a pipeline:
//! filter parameters, sort key and direction, search query and fields, and
//! the current page window.

use serde::{Deserialize, Serialize};

use crate::types::SortDirection;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

// =============================================================================
// ListConfig
// =============================================================================

/// Pipeline configuration.
///
/// `K` is the record's field key type (see [`crate::Record::Field`]), `F` the
/// caller's opaque filter parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig<K, F> {
    pub filters: F,
    #[serde(default = "Option::default")]
    pub sort_by: Option<K>,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub search_query: String,
    #[serde(default = "Vec::new")]
    pub search_fields: Vec<K>,
    /// Current page, 1-based.
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl<K, F> ListConfig<K, F> {
    /// Create a config on page 1 with no sort, no search and the default page size.
    pub fn new(filters: F) -> Self {
        Self {
            filters,
            sort_by: None,
            sort_direction: SortDirection::Asc,
            search_query: String::new(),
            search_fields: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_sort(mut self, field: K, direction: SortDirection) -> Self {
        self.sort_by = Some(field);
        self.sort_direction = direction;
        self
    }

    pub fn with_search_fields(mut self, fields: impl IntoIterator<Item = K>) -> Self {
        self.search_fields = fields.into_iter().collect();
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Clamp `page` and `page_size` to at least 1.
    pub fn normalized(mut self) -> Self {
        self.page = clamp_page(self.page);
        self.page_size = clamp_page_size(self.page_size);
        self
    }

    /// Check if a non-blank search query is set.
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

impl<K, F: Default> Default for ListConfig<K, F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

/// Pages are 1-based; page 0 is treated as page 1.
pub(crate) fn clamp_page(page: usize) -> usize {
    if page == 0 {
        tracing::warn!("page 0 requested, clamping to 1");
        return 1;
    }
    page
}

/// A page size of 0 is treated as 1.
pub(crate) fn clamp_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        tracing::warn!("page size 0 requested, clamping to 1");
        return 1;
    }
    page_size
}

// =============================================================================
// Tests
// =============================================================================
