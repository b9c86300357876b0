//! A minimal type-keyed environment for ambient values.
//!
//! Components never reach for globals; everything they need — in this crate,
//! the [`WebApp`](crate::WebApp) handle — travels through an [`Environment`]
//! passed explicitly at mount time. Substituting a test double is a matter of
//! building an environment around it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An immutable, cheaply clonable bag of values keyed by their type.
#[derive(Clone, Default)]
pub struct Environment {
    values: HashMap<TypeId, Rc<dyn Any>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an environment extended with `value`, replacing any previous
    /// value of the same type.
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
        self
    }

    /// Looks up a value by type.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("len", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[test]
    fn stores_and_retrieves_by_type() {
        let env = Environment::new().with(7_u32).with("label");
        assert_eq!(env.get::<u32>(), Some(&7));
        assert_eq!(env.get::<&str>(), Some(&"label"));
        assert_eq!(env.get::<i64>(), None);
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let env = Environment::new().with(1_u32).with(2_u32);
        assert_eq!(env.get::<u32>(), Some(&2));
    }
}
