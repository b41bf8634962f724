//! Debounce - trailing-edge delayed values.
//!
//! A [`Debouncer`] holds at most one pending value and its deadline. Every
//! `schedule` cancels the previous pending value and restarts the delay, so
//! only the last value of a burst is ever applied.
//!
//! # Pattern
//!
//! - Timers are cooperative: the owner's event loop calls `poll()` each tick
//! - Nothing runs on another thread, so applying a value may touch signals
//! - Dropping the debouncer discards whatever is pending
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use spark_list::state::debounced_signal;
//!
//! let (query, debouncer) = debounced_signal(String::new(), Duration::from_millis(300));
//!
//! debouncer.schedule("l".into());
//! debouncer.schedule("la".into());
//! debouncer.schedule("lamp".into());
//!
//! // ... later, from the event loop ...
//! debouncer.poll(); // query == "lamp" once 300ms have passed since the last keystroke
//! ```

use std::cell::RefCell;
use std::time::{Duration, Instant};

use spark_signals::{signal, Signal};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default debounce delay for search input.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// =============================================================================
// Debouncer
// =============================================================================

struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable trailing-edge timer for values of type `T`.
pub struct Debouncer<T> {
    delay: Duration,
    pending: RefCell<Option<Pending<T>>>,
    apply: Box<dyn Fn(T)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer that calls `apply` with the last scheduled value
    /// once `delay` has passed without a newer one.
    pub fn new(delay: Duration, apply: impl Fn(T) + 'static) -> Self {
        Self {
            delay,
            pending: RefCell::new(None),
            apply: Box::new(apply),
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing any pending value and restarting the delay.
    pub fn schedule(&self, value: T) {
        self.schedule_at(value, Instant::now());
    }

    /// Schedule `value` as if called at `now`.
    pub fn schedule_at(&self, value: T, now: Instant) {
        let replaced = self
            .pending
            .borrow_mut()
            .replace(Pending {
                value,
                deadline: now + self.delay,
            })
            .is_some();

        if replaced {
            tracing::trace!("debounce rescheduled, previous value dropped");
        }
    }

    /// Apply the pending value if its deadline has passed.
    ///
    /// Returns `true` if a value was applied.
    pub fn poll(&self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Apply the pending value if its deadline is at or before `now`.
    pub fn poll_at(&self, now: Instant) -> bool {
        let due = {
            let mut pending = self.pending.borrow_mut();
            match pending.as_ref() {
                Some(p) if p.deadline <= now => pending.take(),
                _ => None,
            }
        };

        match due {
            Some(p) => {
                (self.apply)(p.value);
                true
            }
            None => false,
        }
    }

    /// Apply the pending value immediately, ignoring the deadline.
    ///
    /// Returns `true` if a value was applied.
    pub fn flush(&self) -> bool {
        let pending = self.pending.borrow_mut().take();
        match pending {
            Some(p) => {
                (self.apply)(p.value);
                true
            }
            None => false,
        }
    }

    /// Drop the pending value without applying it.
    ///
    /// Returns `true` if something was pending.
    pub fn cancel(&self) -> bool {
        self.pending.borrow_mut().take().is_some()
    }

    /// Check if a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.borrow().as_ref().map(|p| p.deadline)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if self.pending.get_mut().take().is_some() {
            tracing::trace!("debouncer dropped with a pending value");
        }
    }
}

// =============================================================================
// Debounced Signal
// =============================================================================

/// Create a signal whose writes go through a debouncer.
///
/// Read the signal as usual; write through the debouncer with `schedule`.
/// `flush` on the debouncer applies the pending value right away.
pub fn debounced_signal<T>(initial: T, delay: Duration) -> (Signal<T>, Debouncer<T>)
where
    T: Clone + PartialEq + 'static,
{
    let value = signal(initial);
    let target = value.clone();
    let debouncer = Debouncer::new(delay, move |v| {
        target.set(v);
    });
    (value, debouncer)
}

// =============================================================================
// Tests
// =============================================================================
