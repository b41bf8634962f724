//! # spark-list
//!
//! Reactive list pipeline for Rust: filter, search, sort and paginate a
//! collection, re-deriving the visible page whenever the collection or the
//! list configuration changes.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The pipeline is purely derived-based:
//! ```text
//! items signal → filter → search → sort → paginate → Page
//! ```
//!
//! Each stage is a pure function in [`stages`], wrapped in a memoized
//! derived in [`pipeline`]. [`ListPipeline`] wires the four together over a
//! single [`ListConfig`] signal and exposes the usual list-view operations
//! (search resets to page 1, sort keeps the page, and so on).
//!
//! ## Modules
//!
//! - [`types`] - Core types (Record, FieldValue, SortDirection)
//! - [`config`] - ListConfig, the pipeline configuration
//! - [`page`] - Page, the derived result
//! - [`stages`] - Pure filter/search/sort/paginate functions
//! - [`pipeline`] - Reactive stages and ListPipeline
//! - [`state`] - Debounce and loading timers
//! - [`settings`] - App-level defaults loaded from TOML

pub mod config;
pub mod error;
pub mod page;
pub mod pipeline;
pub mod settings;
pub mod stages;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{ListConfig, DEFAULT_PAGE_SIZE};
pub use error::{ListError, ListResult};
pub use page::Page;
pub use settings::ListSettings;

pub use stages::{compare_values, filter_items, paginate, search_items, sort_items, sort_items_by};

pub use pipeline::{
    filter_derived, page_derived, search_derived, select, sort_derived, sort_derived_by,
    ConfigOf, DebouncedSearch, Getter, ListPipeline, Source,
};

pub use state::{
    debounced_signal, Debouncer, LoadingFlag, DEFAULT_LOADING_TIMEOUT, DEFAULT_SEARCH_DEBOUNCE,
};
