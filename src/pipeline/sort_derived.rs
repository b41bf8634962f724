//! Sort Derived - reactive sort stage.
//!
//! Always sorts a copy; the upstream list keeps its order.

use std::cmp::Ordering;
use std::rc::Rc;

use spark_signals::derived;

use crate::stages::{sort_items, sort_items_by};
use crate::types::{Record, SortDirection};
use super::source::{Getter, Source};

/// Create a sort derived ordered by one record field.
///
/// With no field set, items pass through in upstream order.
pub fn sort_derived<T>(
    items: Source<Vec<T>>,
    sort_by: Source<Option<T::Field>>,
    direction: Source<SortDirection>,
) -> Getter<Vec<T>>
where
    T: Record + Clone + PartialEq + 'static,
{
    let stage = derived(move || {
        let items = items.get();
        let Some(field) = sort_by.get() else {
            return items;
        };
        let direction = direction.get();

        tracing::trace!(len = items.len(), ?field, ?direction, "sort stage");
        sort_items(&items, field, direction)
    });

    Rc::new(move || stage.get())
}

/// Create a sort derived with a caller-supplied comparator.
pub fn sort_derived_by<T, C>(items: Source<Vec<T>>, comparator: C) -> Getter<Vec<T>>
where
    T: Clone + PartialEq + 'static,
    C: Fn(&T, &T) -> Ordering + 'static,
{
    let stage = derived(move || {
        let items = items.get();
        tracing::trace!(len = items.len(), "custom sort stage");
        sort_items_by(&items, &comparator)
    });

    Rc::new(move || stage.get())
}

// =============================================================================
// Tests
// =============================================================================
