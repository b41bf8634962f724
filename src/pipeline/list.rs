//! List Pipeline - filter, search, sort and paginate a reactive collection.
//!
//! A [`ListPipeline`] owns one configuration signal and chains four derived
//! stages over the caller's items signal:
//!
//! ```text
//! items ─► filter ─► search ─► sort ─► page
//!            ▲         ▲        ▲       ▲
//!         filters   query,    sort_by, page,
//!                   fields    direction page_size
//! ```
//!
//! Each stage reads only its own slice of the configuration (through a
//! memoized projection), so moving between pages or re-sorting doesn't
//! re-run the filter predicate.
//!
//! # Staleness
//!
//! The items signal is the only way changes reach the pipeline. Replace the
//! whole collection (`set_items` or `items.set(..)`) after a fetch; mutating
//! items in place behind a clone won't trigger a recompute.
//!
//! # Example
//!
//! ```ignore
//! use spark_signals::signal;
//! use spark_list::{ListConfig, ListPipeline, SortDirection};
//!
//! let items = signal(fetch_listings());
//! let list = ListPipeline::new(
//!     items,
//!     ListConfig::new(Category::All)
//!         .with_search_fields([ListingField::Title])
//!         .with_page_size(12),
//!     |listing: &Listing, category: &Category| category.admits(listing),
//! );
//!
//! list.set_search("lamp");
//! list.set_sort(ListingField::Price, SortDirection::Asc);
//! let page = list.page();
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::config::{clamp_page, clamp_page_size, ListConfig};
use crate::page::Page;
use crate::types::{Record, SortDirection};
use super::filter_derived::{filter_derived, search_derived};
use super::page_derived::page_derived;
use super::sort_derived::sort_derived;
use super::source::{select, Getter, Source};

/// Configuration type of a pipeline over records `T` with filters `F`.
pub type ConfigOf<T, F> = ListConfig<<T as Record>::Field, F>;

// =============================================================================
// ListPipeline
// =============================================================================

/// Reactive list pipeline.
///
/// Cloning is cheap and yields a handle to the same pipeline.
pub struct ListPipeline<T, F>
where
    T: Record + Clone + PartialEq + 'static,
    F: Clone + PartialEq + 'static,
{
    items: Signal<Vec<T>>,
    config: Signal<ConfigOf<T, F>>,
    initial: Rc<ConfigOf<T, F>>,
    filtered: Getter<Vec<T>>,
    sorted: Getter<Vec<T>>,
    page: Getter<Page<T>>,
}

impl<T, F> ListPipeline<T, F>
where
    T: Record + Clone + PartialEq + 'static,
    F: Clone + PartialEq + 'static,
{
    /// Create a pipeline over `items`.
    ///
    /// `predicate` decides whether an item passes the current filter
    /// parameters. `initial` is also what [`reset`](Self::reset) returns to;
    /// a page or page size of 0 in it is raised to 1.
    pub fn new<P>(items: Signal<Vec<T>>, initial: ConfigOf<T, F>, predicate: P) -> Self
    where
        P: Fn(&T, &F) -> bool + 'static,
    {
        let initial = initial.normalized();
        let config = signal(initial.clone());

        // Per-stage projections of the config
        let filters = select(config.clone(), |c: &ConfigOf<T, F>| c.filters.clone());
        // Blank queries collapse to "" so whitespace edits don't invalidate the search
        let query = select(config.clone(), |c: &ConfigOf<T, F>| {
            if c.has_search() {
                c.search_query.clone()
            } else {
                String::new()
            }
        });
        let search_fields = select(config.clone(), |c: &ConfigOf<T, F>| c.search_fields.clone());
        let sort_by = select(config.clone(), |c: &ConfigOf<T, F>| c.sort_by);
        let direction = select(config.clone(), |c: &ConfigOf<T, F>| c.sort_direction);
        let page_number = select(config.clone(), |c: &ConfigOf<T, F>| c.page);
        let page_size = select(config.clone(), |c: &ConfigOf<T, F>| c.page_size);

        let kept = filter_derived(
            Source::Signal(items.clone()),
            Source::Getter(filters),
            predicate,
        );
        let filtered = search_derived(
            Source::Getter(kept),
            Source::Getter(query),
            Source::Getter(search_fields),
        );
        let sorted = sort_derived(
            Source::Getter(filtered.clone()),
            Source::Getter(sort_by),
            Source::Getter(direction),
        );
        let page = page_derived(
            Source::Getter(sorted.clone()),
            Source::Getter(page_number),
            Source::Getter(page_size),
        );

        Self {
            items,
            config,
            initial: Rc::new(initial),
            filtered,
            sorted,
            page,
        }
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// Current source collection.
    pub fn items(&self) -> Vec<T> {
        self.items.get()
    }

    /// The source collection signal.
    pub fn items_signal(&self) -> Signal<Vec<T>> {
        self.items.clone()
    }

    /// Current configuration.
    pub fn config(&self) -> ConfigOf<T, F> {
        self.config.get()
    }

    /// Items after filter and search, in source order.
    pub fn filtered(&self) -> Vec<T> {
        (self.filtered)()
    }

    /// Items after filter, search and sort.
    pub fn sorted(&self) -> Vec<T> {
        (self.sorted)()
    }

    /// The current page.
    pub fn page(&self) -> Page<T> {
        (self.page)()
    }

    /// Getter for the current page, for use in deriveds and effects.
    pub fn page_getter(&self) -> Getter<Page<T>> {
        self.page.clone()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace the source collection.
    pub fn set_items(&self, items: Vec<T>) {
        tracing::debug!(len = items.len(), "list items replaced");
        self.items.set(items);
    }

    /// Replace the filter parameters. Goes back to page 1.
    pub fn set_filters(&self, filters: F) {
        tracing::debug!("list filters updated");
        self.update_config(|c| {
            c.filters = filters;
            c.page = 1;
        });
    }

    /// Replace the search query. Goes back to page 1.
    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        tracing::debug!(query = %query, "list search updated");
        self.update_config(|c| {
            c.search_query = query;
            c.page = 1;
        });
    }

    /// Sort by `field` in `direction`. Keeps the current page.
    pub fn set_sort(&self, field: T::Field, direction: SortDirection) {
        tracing::debug!(?field, ?direction, "list sort updated");
        self.update_config(|c| {
            c.sort_by = Some(field);
            c.sort_direction = direction;
        });
    }

    /// Stop sorting; items keep their filtered order.
    pub fn clear_sort(&self) {
        tracing::debug!("list sort cleared");
        self.update_config(|c| c.sort_by = None);
    }

    /// Flip the sort direction. The sort field is unchanged.
    pub fn toggle_sort_direction(&self) {
        self.update_config(|c| {
            c.sort_direction = c.sort_direction.toggled();
            tracing::debug!(direction = ?c.sort_direction, "list sort direction toggled");
        });
    }

    /// Jump to `page`. Pages past the end yield an empty page.
    pub fn set_page(&self, page: usize) {
        let page = clamp_page(page);
        tracing::debug!(page, "list page set");
        self.update_config(|c| c.page = page);
    }

    /// Advance one page. There is no upper bound.
    pub fn next_page(&self) {
        self.update_config(|c| c.page = c.page.saturating_add(1));
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(&self) {
        self.update_config(|c| c.page = c.page.saturating_sub(1).max(1));
    }

    /// Change the page size. Goes back to page 1.
    pub fn set_page_size(&self, page_size: usize) {
        let page_size = clamp_page_size(page_size);
        tracing::debug!(page_size, "list page size set");
        self.update_config(|c| {
            c.page_size = page_size;
            c.page = 1;
        });
    }

    /// Restore the configuration the pipeline was created with.
    pub fn reset(&self) {
        tracing::debug!("list config reset");
        self.config.set((*self.initial).clone());
    }

    fn update_config(&self, apply: impl FnOnce(&mut ConfigOf<T, F>)) {
        let mut config = self.config.get();
        apply(&mut config);
        self.config.set(config);
    }
}

impl<T, F> Clone for ListPipeline<T, F>
where
    T: Record + Clone + PartialEq + 'static,
    F: Clone + PartialEq + 'static,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            config: self.config.clone(),
            initial: self.initial.clone(),
            filtered: self.filtered.clone(),
            sorted: self.sorted.clone(),
            page: self.page.clone(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use spark_signals::{effect, flush_sync};

    use crate::types::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Product {
        id: u32,
        name: &'static str,
        price: i64,
        in_stock: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ProductField {
        Name,
        Price,
    }

    impl Record for Product {
        type Field = ProductField;

        fn field(&self, field: ProductField) -> FieldValue {
            match field {
                ProductField::Name => self.name.into(),
                ProductField::Price => self.price.into(),
            }
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct StockFilter {
        only_in_stock: bool,
    }

    fn in_stock_filter(p: &Product, f: &StockFilter) -> bool {
        !f.only_in_stock || p.in_stock
    }

    fn products() -> Vec<Product> {
        vec![
            Product { id: 1, name: "Apple", price: 10, in_stock: true },
            Product { id: 2, name: "Banana", price: 5, in_stock: false },
            Product { id: 3, name: "apricot", price: 20, in_stock: true },
        ]
    }

    fn ids(items: &[Product]) -> Vec<u32> {
        items.iter().map(|p| p.id).collect()
    }

    fn setup(config: ConfigOf<Product, StockFilter>) -> ListPipeline<Product, StockFilter> {
        ListPipeline::new(signal(products()), config, in_stock_filter)
    }

    fn base_config() -> ConfigOf<Product, StockFilter> {
        ListConfig::new(StockFilter::default()).with_search_fields([ProductField::Name])
    }

    #[test]
    fn test_no_config_is_source_order() {
        let list = setup(base_config());
        let page = list.page();
        assert_eq!(ids(&page.items), vec![1, 2, 3]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_example() {
        let list = setup(base_config());
        list.set_search("ap");
        assert_eq!(ids(&list.filtered()), vec![1, 3]);
    }

    #[test]
    fn test_sort_and_paginate_example() {
        let list = setup(
            base_config()
                .with_sort(ProductField::Price, SortDirection::Asc)
                .with_page_size(2),
        );
        let page = list.page();
        assert_eq!(page.items.iter().map(|p| p.name).collect::<Vec<_>>(), vec!["Banana", "Apple"]);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_page_past_end_example() {
        let list = setup(base_config().with_page_size(2));
        list.set_page(5);
        let page = list.page();
        assert!(page.items.is_empty());
        assert_eq!(page.page, 5);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn test_filters_apply_predicate() {
        let list = setup(base_config());
        list.set_filters(StockFilter { only_in_stock: true });
        assert_eq!(ids(&list.page().items), vec![1, 3]);
    }

    #[test]
    fn test_set_filters_resets_page() {
        let list = setup(base_config().with_page_size(1));
        list.set_page(3);
        list.set_filters(StockFilter { only_in_stock: true });
        assert_eq!(list.config().page, 1);
    }

    #[test]
    fn test_set_search_resets_page() {
        let list = setup(base_config().with_page_size(1));
        list.next_page();
        list.next_page();
        assert_eq!(list.config().page, 3);

        list.set_search("a");
        assert_eq!(list.config().page, 1);
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let list = setup(base_config().with_page_size(1));
        list.set_page(2);
        list.set_sort(ProductField::Price, SortDirection::Desc);
        assert_eq!(list.config().page, 2);
        assert_eq!(ids(&list.page().items), vec![1]);
    }

    #[test]
    fn test_sort_and_page_size_keep_filters_and_search() {
        let list = setup(base_config());
        list.set_filters(StockFilter { only_in_stock: true });
        list.set_search("ap");

        list.set_sort(ProductField::Price, SortDirection::Desc);
        list.set_page_size(1);

        let config = list.config();
        assert!(config.filters.only_in_stock);
        assert_eq!(config.search_query, "ap");
        assert_eq!(config.page, 1);
        assert_eq!(ids(&list.sorted()), vec![3, 1]);
    }

    #[test]
    fn test_toggle_sort_direction() {
        let list = setup(base_config().with_sort(ProductField::Price, SortDirection::Asc));
        let original = ids(&list.sorted());

        list.toggle_sort_direction();
        assert_eq!(list.config().sort_direction, SortDirection::Desc);
        assert_eq!(list.config().sort_by, Some(ProductField::Price));
        assert_eq!(ids(&list.sorted()), vec![3, 1, 2]);

        list.toggle_sort_direction();
        assert_eq!(ids(&list.sorted()), original);
    }

    #[test]
    fn test_clear_sort_restores_filtered_order() {
        let list = setup(base_config().with_sort(ProductField::Price, SortDirection::Asc));
        list.clear_sort();
        assert_eq!(ids(&list.sorted()), vec![1, 2, 3]);
    }

    #[test]
    fn test_previous_page_floors_at_one() {
        let list = setup(base_config());
        list.previous_page();
        assert_eq!(list.config().page, 1);

        list.set_page(3);
        list.previous_page();
        assert_eq!(list.config().page, 2);
    }

    #[test]
    fn test_next_page_has_no_ceiling() {
        let list = setup(base_config().with_page_size(2));
        list.next_page();
        list.next_page();
        let page = list.page();
        assert_eq!(page.page, 3);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let list = setup(base_config().with_page_size(1));
        list.set_page(3);
        list.set_page_size(2);
        let page = list.page();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_zero_values_clamped() {
        let list = setup(base_config().with_page_size(0).with_page(0));
        assert_eq!(list.config().page, 1);
        assert_eq!(list.config().page_size, 1);

        list.set_page_size(0);
        assert_eq!(list.config().page_size, 1);

        list.set_page(0);
        assert_eq!(list.config().page, 1);
    }

    #[test]
    fn test_reset_restores_initial() {
        let initial = base_config().with_page_size(2);
        let list = setup(initial.clone());

        list.set_filters(StockFilter { only_in_stock: true });
        list.set_search("x");
        list.set_sort(ProductField::Name, SortDirection::Desc);
        list.set_page(4);

        list.reset();
        assert_eq!(list.config(), initial);
        assert_eq!(ids(&list.page().items), vec![1, 2]);
    }

    #[test]
    fn test_set_items_recomputes() {
        let list = setup(base_config());
        list.set_search("cherry");
        assert!(list.page().items.is_empty());

        let mut fresh = products();
        fresh.push(Product { id: 4, name: "Cherry", price: 8, in_stock: true });
        list.set_items(fresh);

        assert_eq!(ids(&list.page().items), vec![4]);
        assert_eq!(list.items().len(), 4);
    }

    #[test]
    fn test_external_items_signal_drives_pipeline() {
        let items = signal(Vec::new());
        let list = ListPipeline::new(items.clone(), base_config(), in_stock_filter);
        assert_eq!(list.page().total_items, 0);

        items.set(products());
        assert_eq!(list.page().total_items, 3);
    }

    #[test]
    fn test_source_order_never_mutated() {
        let list = setup(base_config().with_sort(ProductField::Price, SortDirection::Desc));
        let _ = list.page();
        assert_eq!(ids(&list.items()), vec![1, 2, 3]);
    }

    #[test]
    fn test_effect_sees_config_changes() {
        let list = setup(base_config());
        let runs = Rc::new(Cell::new(0));
        let last_total = Rc::new(Cell::new(0));

        let runs_clone = runs.clone();
        let total_clone = last_total.clone();
        let page = list.page_getter();
        let _stop = effect(move || {
            total_clone.set(page().total_items);
            runs_clone.set(runs_clone.get() + 1);
        });

        flush_sync();
        assert_eq!(runs.get(), 1);
        assert_eq!(last_total.get(), 3);

        list.set_search("ban");
        flush_sync();
        assert!(runs.get() >= 2);
        assert_eq!(last_total.get(), 1);
    }

    #[test]
    fn test_clone_shares_state() {
        let list = setup(base_config());
        let handle = list.clone();
        handle.set_search("banana");
        assert_eq!(ids(&list.filtered()), vec![2]);
    }

    #[test]
    fn test_paging_and_sorting_skip_filter() {
        let calls = Rc::new(Cell::new(0usize));
        let calls_clone = calls.clone();
        let list = ListPipeline::new(
            signal(products()),
            base_config().with_page_size(1),
            move |p: &Product, f: &StockFilter| {
                calls_clone.set(calls_clone.get() + 1);
                in_stock_filter(p, f)
            },
        );

        let _ = list.page();
        let after_first = calls.get();
        assert_eq!(after_first, 3);

        list.set_page(2);
        assert_eq!(ids(&list.page().items), vec![2]);
        list.next_page();
        let _ = list.page();
        list.set_sort(ProductField::Price, SortDirection::Desc);
        let _ = list.page();
        list.toggle_sort_direction();
        assert_eq!(ids(&list.page().items), vec![3]);
        list.set_search("   ");
        let _ = list.page();
        assert_eq!(calls.get(), after_first);

        list.set_filters(StockFilter { only_in_stock: true });
        assert_eq!(list.page().total_items, 2);
        assert!(calls.get() > after_first);
    }
}
