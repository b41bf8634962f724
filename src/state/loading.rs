//! Loading flag with automatic timeout.
//!
//! Wraps a `Signal<bool>` for "list is loading" indicators. A started flag
//! clears itself once its timeout passes, so a fetch that never reports
//! back can't leave the list stuck in a loading state. Like the debouncer,
//! the timeout is checked cooperatively from `poll()`.

use std::cell::Cell;
use std::time::{Duration, Instant};

use spark_signals::{signal, Signal};

/// Default timeout before a loading flag clears itself.
pub const DEFAULT_LOADING_TIMEOUT: Duration = Duration::from_secs(30);

/// Reactive loading flag.
pub struct LoadingFlag {
    active: Signal<bool>,
    deadline: Cell<Option<Instant>>,
    timeout: Duration,
}

impl LoadingFlag {
    pub fn new(timeout: Duration) -> Self {
        Self {
            active: signal(false),
            deadline: Cell::new(None),
            timeout,
        }
    }

    /// Mark as loading and arm the timeout.
    pub fn start(&self) {
        self.start_at(Instant::now());
    }

    /// Mark as loading as if called at `now`.
    pub fn start_at(&self, now: Instant) {
        self.deadline.set(Some(now + self.timeout));
        self.active.set(true);
    }

    /// Clear the flag and disarm the timeout.
    pub fn stop(&self) {
        self.deadline.set(None);
        self.active.set(false);
    }

    /// Clear the flag if its timeout has passed.
    ///
    /// Returns `true` if the flag timed out on this call.
    pub fn poll(&self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&self, now: Instant) -> bool {
        match self.deadline.get() {
            Some(deadline) if deadline <= now => {
                tracing::warn!(timeout_ms = self.timeout.as_millis() as u64, "loading timeout reached");
                self.stop();
                true
            }
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.active.get()
    }

    /// The underlying signal, for use in deriveds and effects.
    pub fn signal(&self) -> Signal<bool> {
        self.active.clone()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for LoadingFlag {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_TIMEOUT)
    }
}
