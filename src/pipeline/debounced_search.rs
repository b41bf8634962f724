//! Debounced search input for a [`ListPipeline`].
//!
//! Keystrokes go to [`DebouncedSearch::set_search`]; the pipeline only sees
//! the last query once the input has been quiet for the delay.

use std::time::{Duration, Instant};

use crate::state::Debouncer;
use crate::types::Record;
use super::list::ListPipeline;

/// Debounced front for a pipeline's search query.
///
/// Dropping it discards any query still waiting for its delay.
pub struct DebouncedSearch {
    debouncer: Debouncer<String>,
}

impl DebouncedSearch {
    /// Queue `query`. Replaces any query still waiting.
    pub fn set_search(&self, query: impl Into<String>) {
        self.debouncer.schedule(query.into());
    }

    /// Queue `query` as if typed at `now`.
    pub fn set_search_at(&self, query: impl Into<String>, now: Instant) {
        self.debouncer.schedule_at(query.into(), now);
    }

    /// Apply the waiting query if the delay has passed.
    ///
    /// Returns `true` if the pipeline's search was updated.
    pub fn poll(&self) -> bool {
        self.debouncer.poll()
    }

    pub fn poll_at(&self, now: Instant) -> bool {
        self.debouncer.poll_at(now)
    }

    /// Apply the waiting query now (e.g. on Enter).
    pub fn flush(&self) -> bool {
        self.debouncer.flush()
    }

    /// Drop the waiting query.
    pub fn cancel(&self) -> bool {
        self.debouncer.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }
}

impl<T, F> ListPipeline<T, F>
where
    T: Record + Clone + PartialEq + 'static,
    F: Clone + PartialEq + 'static,
{
    /// Create a debounced search input for this pipeline.
    ///
    /// See [`crate::state::DEFAULT_SEARCH_DEBOUNCE`] for the usual delay.
    pub fn debounced_search(&self, delay: Duration) -> DebouncedSearch {
        let list = self.clone();
        DebouncedSearch {
            debouncer: Debouncer::new(delay, move |query: String| list.set_search(query)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    use crate::config::ListConfig;
    use crate::state::DEFAULT_SEARCH_DEBOUNCE;
    use crate::types::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Seller {
        handle: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Handle;

    impl Record for Seller {
        type Field = Handle;

        fn field(&self, _: Handle) -> FieldValue {
            self.handle.into()
        }
    }

    fn setup() -> ListPipeline<Seller, ()> {
        let items = signal(vec![
            Seller { handle: "mossy" },
            Seller { handle: "moth" },
            Seller { handle: "fern" },
        ]);
        ListPipeline::new(
            items,
            ListConfig::new(()).with_search_fields([Handle]),
            |_: &Seller, _: &()| true,
        )
    }

    #[test]
    fn test_only_last_query_reaches_pipeline() {
        let list = setup();
        let search = list.debounced_search(DEFAULT_SEARCH_DEBOUNCE);
        let t0 = Instant::now();

        search.set_search_at("m", t0);
        search.set_search_at("mo", t0 + Duration::from_millis(120));
        search.set_search_at("mos", t0 + Duration::from_millis(240));

        // Nothing applied yet
        assert!(!search.poll_at(t0 + Duration::from_millis(400)));
        assert_eq!(list.config().search_query, "");
        assert_eq!(list.page().total_items, 3);

        assert!(search.poll_at(t0 + Duration::from_millis(540)));
        assert_eq!(list.config().search_query, "mos");
        assert_eq!(list.page().total_items, 1);
    }

    #[test]
    fn test_flush_applies_now() {
        let list = setup();
        let search = list.debounced_search(Duration::from_secs(10));

        search.set_search("fern");
        assert!(search.is_pending());
        assert!(search.flush());
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_drop_cancels_pending_query() {
        let list = setup();
        let search = list.debounced_search(Duration::from_millis(1));
        search.set_search("fern");
        drop(search);

        assert_eq!(list.config().search_query, "");
    }

    #[test]
    fn test_applied_query_resets_page() {
        let list = setup();
        list.set_page_size(1);
        list.set_page(3);

        let search = list.debounced_search(DEFAULT_SEARCH_DEBOUNCE);
        search.set_search("mo");
        search.flush();

        assert_eq!(list.config().page, 1);
        assert_eq!(list.page().total_pages, 2);
    }
}
