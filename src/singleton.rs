//! The shared instance handed out by a holder.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The one instance of a holder, carrying its payload.
///
/// Instances are only ever created by a holder's `obtain`, always together
/// with their payload, and are shared as `Arc<Singleton<T>>`.
pub struct Singleton<T> {
    value: T,
}

impl<T> Singleton<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// The payload fixed by the first `obtain`.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns `true` if both handles point at the same instance.
    ///
    /// ```rust
    /// use singleton_holder::{define_singleton, Singleton};
    ///
    /// define_singleton!(greeting, String);
    ///
    /// let first = greeting::obtain("First instance".to_string());
    /// let second = greeting::obtain("Second instance".to_string());
    /// assert!(Singleton::same(&first, &second));
    /// ```
    pub fn same(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl<T> Deref for Singleton<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("value", &self.value)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
