//! Append-only buffer with capacity doubling

use tracing::debug;

/// Append-only growable buffer
///
/// Capacity starts at the configured initial size and doubles whenever the
/// buffer is full, giving amortized O(1) appends.
#[derive(Debug, Clone)]
pub struct GeometryBuffer<T> {
    items: Vec<T>,
}

impl<T> GeometryBuffer<T> {
    /// Create a buffer with the given initial capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Append an item, doubling the capacity first if the buffer is full
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(1);
            self.items.reserve_exact(grow_by);
            debug!(
                "GeometryBuffer: grew to capacity {} ({} items)",
                self.items.capacity(),
                self.items.len()
            );
        }
        self.items.push(item);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the buffer, returning the stored items in insertion order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> std::ops::Deref for GeometryBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
