//! Page Derived - reactive pagination stage.

use std::rc::Rc;

use spark_signals::derived;

use crate::page::Page;
use crate::stages::paginate;
use super::source::{Getter, Source};

/// Create the page derived.
///
/// Produces the requested page of `items` with metadata computed from the
/// full list. Pages past the end are empty rather than clamped.
pub fn page_derived<T>(
    items: Source<Vec<T>>,
    page: Source<usize>,
    page_size: Source<usize>,
) -> Getter<Page<T>>
where
    T: Clone + PartialEq + 'static,
{
    let stage = derived(move || {
        let items = items.get();
        let result = paginate(&items, page.get(), page_size.get());

        tracing::trace!(
            page = result.page,
            total_pages = result.total_pages,
            total_items = result.total_items,
            "page stage"
        );
        result
    });

    Rc::new(move || stage.get())
}
