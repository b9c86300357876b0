//! Shared click handlers compared by identity rather than by value.

use std::fmt;
use std::rc::Rc;

/// A shared, reference-counted click handler.
///
/// Cloning a `Callback` shares the underlying closure, so the clone has the
/// *same identity* as the original. Building a new `Callback` from another
/// closure, even one with identical behavior, yields a distinct identity.
/// Widgets deregister handlers by exact reference, so components track the
/// last registered `Callback` and only touch the host when the identity
/// changes.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wraps a closure into a shared handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    pub fn call(&self) {
        (self.0)();
    }

    /// Returns `true` when both handlers share the same underlying closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Identity comparison lifted over optional handlers.
///
/// Two absent handlers count as unchanged; an absent and a present handler
/// never do.
pub(crate) fn same_identity(last: &Option<Callback>, next: &Option<Callback>) -> bool {
    match (last, next) {
        (Some(last), Some(next)) => last.ptr_eq(next),
        (None, None) => true,
        _ => false,
    }
}
