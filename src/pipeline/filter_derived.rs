//! Filter Derived - reactive filter and search stages.
//!
//! Both stages are keep/drop passes that preserve the relative order of
//! the items they keep, so they commute with each other.

use std::rc::Rc;

use spark_signals::derived;

use crate::stages::{filter_items, search_items};
use crate::types::Record;
use super::source::{Getter, Source};

/// Create a filter derived.
///
/// Re-runs `predicate` over the items whenever the items or the filter
/// parameters change.
pub fn filter_derived<T, F, P>(
    items: Source<Vec<T>>,
    filters: Source<F>,
    predicate: P,
) -> Getter<Vec<T>>
where
    T: Clone + PartialEq + 'static,
    F: Clone + PartialEq + 'static,
    P: Fn(&T, &F) -> bool + 'static,
{
    let stage = derived(move || {
        let items = items.get();
        let filters = filters.get();

        let kept = filter_items(&items, &filters, &predicate);
        tracing::trace!(input = items.len(), kept = kept.len(), "filter stage");
        kept
    });

    Rc::new(move || stage.get())
}

/// Create a search derived.
///
/// Keeps items where any of the search fields contains the query
/// (case-insensitive). A blank query passes everything through.
pub fn search_derived<T>(
    items: Source<Vec<T>>,
    query: Source<String>,
    fields: Source<Vec<T::Field>>,
) -> Getter<Vec<T>>
where
    T: Record + Clone + PartialEq + 'static,
{
    let stage = derived(move || {
        let items = items.get();
        let query = query.get();
        let fields = fields.get();

        let kept = search_items(&items, &query, &fields);
        tracing::trace!(input = items.len(), kept = kept.len(), query = %query, "search stage");
        kept
    });

    Rc::new(move || stage.get())
}

// =============================================================================
// Tests
// =============================================================================
