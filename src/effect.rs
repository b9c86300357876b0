//! Dependency-gated synchronization effects with cleanup.
//!
//! An [`EffectCell`] is the manual rendition of an attach/detach lifecycle
//! hook: it remembers the dependency value an effect last ran against and
//! skips the effect while the value stays unchanged. When the value does
//! change, the previous run's cleanup executes before the effect runs again,
//! and any pending cleanup executes when the cell is torn down or dropped.

use std::fmt;

/// A deferred undo action returned by an effect run.
pub type Cleanup = Box<dyn FnOnce()>;

/// A single effect slot keyed on one dependency value.
pub struct EffectCell<T> {
    last: Option<T>,
    cleanup: Option<Cleanup>,
}

impl<T> EffectCell<T> {
    /// Creates an empty cell. The first `sync` always runs its effect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            cleanup: None,
        }
    }

    /// Synchronizes the cell with a custom change predicate.
    ///
    /// `unchanged` receives the previously recorded value and the incoming
    /// one; when it returns `true` the effect is skipped. Otherwise the
    /// pending cleanup runs first, then `effect`, whose returned cleanup is
    /// retained for the next change or for teardown.
    pub fn sync_with(
        &mut self,
        value: T,
        unchanged: impl FnOnce(&T, &T) -> bool,
        effect: impl FnOnce(&T) -> Option<Cleanup>,
    ) {
        if let Some(last) = &self.last {
            if unchanged(last, &value) {
                self.last = Some(value);
                return;
            }
        }
        self.teardown();
        self.cleanup = effect(&value);
        self.last = Some(value);
    }

    /// Synchronizes the cell, comparing dependencies with `==`.
    pub fn sync(&mut self, value: T, effect: impl FnOnce(&T) -> Option<Cleanup>)
    where
        T: PartialEq,
    {
        self.sync_with(value, |last, next| last == next, effect);
    }

    /// Runs the pending cleanup, if any. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl<T> Default for EffectCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for EffectCell<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<T: fmt::Debug> fmt::Debug for EffectCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectCell")
            .field("last", &self.last)
            .field("armed", &self.cleanup.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Cleanup, EffectCell};

    fn recording(log: &Rc<RefCell<Vec<String>>>, cell: &mut EffectCell<i32>, value: i32) {
        let log = Rc::clone(log);
        cell.sync(value, move |value| {
            log.borrow_mut().push(format!("run {value}"));
            let value = *value;
            Some(Box::new(move || log.borrow_mut().push(format!("undo {value}"))) as Cleanup)
        });
    }

    #[test]
    fn first_sync_always_runs() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cell = EffectCell::new();
        recording(&log, &mut cell, 1);
        assert_eq!(&*log.borrow(), &["run 1"]);
    }

    #[test]
    fn unchanged_value_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cell = EffectCell::new();
        recording(&log, &mut cell, 1);
        recording(&log, &mut cell, 1);
        assert_eq!(&*log.borrow(), &["run 1"]);
    }

    #[test]
    fn cleanup_runs_before_next_effect_and_on_drop() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cell = EffectCell::new();
        recording(&log, &mut cell, 1);
        recording(&log, &mut cell, 2);
        drop(cell);
        assert_eq!(&*log.borrow(), &["run 1", "undo 1", "run 2", "undo 2"]);
    }
}
