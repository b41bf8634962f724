//! State Module - Timed view state
//!
//! Small reactive state holders whose behavior depends on time:
//!
//! - **Debounce** - Trailing-edge delayed writes (search input)
//! - **Loading** - Loading flag that clears itself after a timeout
//!
//! Both are cooperative: the owner's event loop calls `poll()`; nothing is
//! scheduled on another thread.

mod debounce;
mod loading;

pub use debounce::*;
pub use loading::*;
