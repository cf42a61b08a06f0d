use std::sync::{Mutex, MutexGuard, PoisonError};

/// Exclusive lock around the state of a publication.
///
/// A panic while the lock is held does not render the state unusable;
/// the guard is recovered from the poisoned mutex.
pub(crate) struct Lock<T>(Mutex<T>);

impl<T> Lock<T> {
    pub(crate) fn new(t: T) -> Self {
        Self(Mutex::new(t))
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Default> Default for Lock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Lock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Lock").field(&*self.lock()).finish()
    }
}
