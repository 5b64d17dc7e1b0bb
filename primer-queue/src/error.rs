//! Error types for queue construction and insertion.

use thiserror::Error;

/// Error returned when enqueueing into a full queue.
///
/// Contains the value that could not be inserted, allowing recovery.
///
/// # Example
///
/// ```
/// use primer_queue::{CircularQueue, Full};
///
/// let mut queue = CircularQueue::with_capacity(1);
/// queue.try_enqueue("a").unwrap();
///
/// let err = queue.try_enqueue("b").unwrap_err();
/// assert_eq!(err, Full("b"));
/// assert_eq!(err.into_inner(), "b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is full")]
pub struct Full<T>(
    /// The value that could not be inserted.
    pub T,
);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error during queue construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Capacity is zero. A ring needs at least one slot.
    #[error("capacity cannot be zero")]
    ZeroCapacity,
    /// The builder was asked to build without a capacity.
    #[error("capacity was not set")]
    MissingCapacity,
}
