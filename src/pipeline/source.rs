//! Source - a value a derived stage can read from.
//!
//! Stage inputs can be:
//! - Static values: `Source::Static(vec![...])`
//! - Signals: `Source::Signal(items)` (stays connected!)
//! - Getters: `Source::Getter(other_stage)`, e.g. the output of another derived
//!
//! Reading a `Signal` or `Getter` source inside a derived registers a
//! dependency, so pass the signal itself, not its current value.

use std::rc::Rc;

use spark_signals::{derived, Signal};

/// Read handle for a derived value.
///
/// Calling it returns the current (memoized) value and, inside another
/// derived or effect, tracks it as a dependency.
pub type Getter<T> = Rc<dyn Fn() -> T>;

/// Input to a derived stage.
pub enum Source<T: Clone + PartialEq + 'static> {
    /// Fixed value (not reactive).
    Static(T),
    /// Reactive signal.
    Signal(Signal<T>),
    /// Getter function, typically another stage's output.
    Getter(Getter<T>),
}

impl<T: Clone + PartialEq + 'static> Source<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            Source::Static(v) => v.clone(),
            Source::Signal(s) => s.get(),
            Source::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Static(v) => Source::Static(v.clone()),
            Source::Signal(s) => Source::Signal(s.clone()),
            Source::Getter(f) => Source::Getter(f.clone()),
        }
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for Source<T> {
    fn from(value: T) -> Self {
        Source::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for Source<T> {
    fn from(signal: Signal<T>) -> Self {
        Source::Signal(signal)
    }
}

impl<T: Clone + PartialEq + 'static> From<Getter<T>> for Source<T> {
    fn from(getter: Getter<T>) -> Self {
        Source::Getter(getter)
    }
}

/// Memoized projection of one part of a signal's value.
///
/// Readers of the returned getter only see a change when the projected part
/// changes, not on every write to `source`.
pub fn select<C, V, S>(source: Signal<C>, selector: S) -> Getter<V>
where
    C: Clone + PartialEq + 'static,
    V: Clone + PartialEq + 'static,
    S: Fn(&C) -> V + 'static,
{
    let projection = derived(move || selector(&source.get()));
    Rc::new(move || projection.get())
}
