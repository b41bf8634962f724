//! Reactive Pipeline
//!
//! This module connects the pure stage functions to the reactive graph.
//!
//! # Pipeline Architecture
//!
//! ```text
//! items signal → filterDerived → searchDerived → sortDerived → pageDerived → Page
//! ```
//!
//! ## Data Flow
//!
//! 1. **filterDerived** - Applies the caller's predicate with the current filters
//! 2. **searchDerived** - Case-insensitive substring match over search fields
//! 3. **sortDerived** - Stable sort of a copy by one field (or a comparator)
//! 4. **pageDerived** - Slices the requested page, computes metadata
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: every stage is a pure function of its inputs
//! - **Memoized**: a stage re-runs only when something it read has changed
//! - **Reactive Dependencies**: reads from signals/getters auto-track dependencies

pub mod source;
pub mod filter_derived;
pub mod sort_derived;
pub mod page_derived;
pub mod list;
pub mod debounced_search;

// Re-exports
pub use source::{select, Getter, Source};
pub use filter_derived::{filter_derived, search_derived};
pub use sort_derived::{sort_derived, sort_derived_by};
pub use page_derived::page_derived;
pub use list::{ConfigOf, ListPipeline};
pub use debounced_search::DebouncedSearch;
