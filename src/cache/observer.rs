//! Observer Module
//!
//! Ordered registry of update callbacks driven by the store on every put.

use std::fmt;

/// Callback invoked with the key and value of every insert or update.
pub type Callback<K, V> = Box<dyn FnMut(&K, &V)>;

// == Observers ==
/// Subscriber list, notified synchronously in subscription order.
///
/// There is no de-duplication and no unsubscribe. A panicking callback
/// unwinds through `notify` and skips the subscribers after it.
pub struct Observers<K, V> {
    callbacks: Vec<Callback<K, V>>,
}

impl<K, V> Observers<K, V> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    // == Subscribe ==
    /// Appends a callback to the end of the list.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&K, &V) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    // == Notify ==
    /// Invokes every callback once with the same pair.
    pub fn notify(&mut self, key: &K, value: &V) {
        for callback in self.callbacks.iter_mut() {
            callback(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<K, V> Default for Observers<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Observers<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
