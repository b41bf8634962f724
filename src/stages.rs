//! Pipeline stages - pure functions over slices.
//!
//! Each stage takes its input by reference and returns a fresh `Vec`, so the
//! source collection is never reordered or mutated. Filter and search keep
//! the relative order of surviving items; sort is stable.
//!
//! ```text
//! items → filter_items → search_items → sort_items → paginate → Page
//! ```

use std::cmp::Ordering;

use crate::page::Page;
use crate::types::{FieldValue, Record, SortDirection};
use crate::config::{clamp_page, clamp_page_size};

// =============================================================================
// Filter
// =============================================================================

/// Keep the items for which `predicate(item, filters)` returns true.
pub fn filter_items<T, F, P>(items: &[T], filters: &F, predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T, &F) -> bool,
{
    items
        .iter()
        .filter(|item| predicate(item, filters))
        .cloned()
        .collect()
}

// =============================================================================
// Search
// =============================================================================

/// Keep the items where any of `fields` contains `query`, ignoring case.
///
/// A blank query (empty or whitespace only) keeps everything. The query is
/// lowercased as given, so surrounding whitespace is part of the match.
pub fn search_items<T>(items: &[T], query: &str, fields: &[T::Field]) -> Vec<T>
where
    T: Record + Clone,
{
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let lowered = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_any_field(*item, &lowered, fields))
        .cloned()
        .collect()
}

fn matches_any_field<T: Record>(item: &T, lowered_query: &str, fields: &[T::Field]) -> bool {
    fields
        .iter()
        .any(|field| item.field(*field).matches_query(lowered_query))
}

// =============================================================================
// Sort
// =============================================================================

/// Compare two field values: `Less` if `a < b`, `Greater` if `a > b`, else `Equal`.
///
/// Plain value comparison, no locale-aware collation. Pairs that have no
/// natural order still get a stable answer so sorting always sees a total
/// order: floats use IEEE total ordering and values of different kinds rank
/// null, bool, number, text.
///
/// Mixed kinds are never coerced: `Text("10")` sorts after `Int(9)` and
/// `Null` sorts before every number, whatever the numeric value.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Float(x), FieldValue::Float(y)) => x.total_cmp(y),
        (FieldValue::Int(x), FieldValue::Float(y)) => (*x as f64).total_cmp(y),
        (FieldValue::Float(x), FieldValue::Int(y)) => x.total_cmp(&(*y as f64)),
        _ => match a.partial_cmp(b) {
            Some(ordering) => ordering,
            None => kind_rank(a).cmp(&kind_rank(b)),
        },
    }
}

fn kind_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Bool(_) => 1,
        FieldValue::Int(_) | FieldValue::Float(_) => 2,
        FieldValue::Text(_) => 3,
    }
}

/// Sorted copy of `items` by one field.
pub fn sort_items<T>(items: &[T], field: T::Field, direction: SortDirection) -> Vec<T>
where
    T: Record + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| direction.apply(compare_values(&a.field(field), &b.field(field))));
    sorted
}

/// Sorted copy of `items` using a caller-supplied comparator.
pub fn sort_items_by<T, C>(items: &[T], comparator: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| comparator(a, b));
    sorted
}

// =============================================================================
// Paginate
// =============================================================================

/// Slice one page out of `items`.
///
/// Metadata is computed from the full length of `items`. `page` and
/// `page_size` of 0 are treated as 1; a page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = clamp_page(page);
    let page_size = clamp_page_size(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let slice = items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page::new(slice, page, page_size, items.len())
}

// =============================================================================
// Tests
// =============================================================================
