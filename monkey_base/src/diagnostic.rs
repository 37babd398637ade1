//! Contains the [`Handler`] trait through which the front end reports diagnostics, and the
//! handlers shared by the crates.

use std::sync::{RwLock, RwLockReadGuard};

/// Represents a trait responsible for receiving the diagnostics reported while processing the
/// source code.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics in a vector.
#[derive(Debug)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of diagnostics.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner().unwrap() }

    /// Returns a reference to the underlying vector of diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.diagnostics.read().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.diagnostics.write().unwrap().push(diagnostic.into()); }
}

/// Is a struct that implements [`Handler`] trait by doing nothing with the diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _diagnostic: T) {}
}

/// Is a struct that implements [`Handler`] trait by counting the number of diagnostics received.
#[derive(Debug, Default)]
pub struct Counter {
    counter: RwLock<usize>,
}

impl Counter {
    /// Returns the number of diagnostics received.
    #[must_use]
    pub fn count(&self) -> usize { *self.counter.read().unwrap() }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _diagnostic: T) { *self.counter.write().unwrap() += 1; }
}

#[cfg(test)]
mod tests {
    use super::{Counter, Dummy, Handler, Storage};

    #[test]
    fn storage_keeps_order() {
        let storage: Storage<String> = Storage::new();
        storage.receive("first");
        storage.receive("second");

        assert_eq!(*storage.as_vec(), vec!["first", "second"]);
        assert_eq!(storage.into_vec().len(), 2);
    }

    #[test]
    fn counter_counts_any_diagnostic() {
        let counter = Counter::default();
        assert_eq!(counter.count(), 0);

        counter.receive(1);
        counter.receive("two");
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn dummy_discards() {
        let handler: &dyn Handler<u8> = &Dummy;
        handler.receive(0);
    }
}
