//! A module for handling diagnostic reporting in the checker.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use derive_more::{Deref, DerefMut};

/// Represents a trait responsible for receiving diagnostics reported by the checker.
///
/// The checker's components never print; every classification outcome or structural finding is
/// delivered to a [`Handler`] as a value.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics in a vector.
#[derive(Debug, Deref, DerefMut)]
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

    /// Returns a mutable reference to the underlying vector of diagnostics.
    pub fn as_vec_mut(&self) -> RwLockWriteGuard<Vec<T>> { self.diagnostics.write().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) {
        self.diagnostics.write().unwrap().push(diagnostic.into());
    }
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

    /// Resets the counter to zero.
    pub fn reset(&self) { *self.counter.write().unwrap() = 0 }
}

impl<T> Handler<T> for Counter {
    fn receive(&self, _diagnostic: T) { *self.counter.write().unwrap() += 1; }
}
