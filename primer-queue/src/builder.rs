//! Builder for [`CircularQueue`].

use crate::{CircularQueue, QueueError};

/// Builder for a fixed-capacity circular queue.
///
/// Validates the configuration at [`build`](QueueBuilder::build) time instead
/// of panicking, which suits capacities that come from user input.
///
/// # Example
///
/// ```
/// use primer_queue::{QueueBuilder, QueueError};
///
/// let queue = QueueBuilder::new().capacity(5).build::<u64>().unwrap();
/// assert_eq!(queue.capacity(), 5);
///
/// let err = QueueBuilder::new().capacity(0).build::<u64>().unwrap_err();
/// assert_eq!(err, QueueError::ZeroCapacity);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueueBuilder {
    capacity: Option<usize>,
}

impl QueueBuilder {
    /// Creates a builder with no capacity set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots in the ring. Fixed for the queue's lifetime.
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = Some(slots);
        self
    }

    /// Builds the queue.
    ///
    /// # Errors
    ///
    /// - [`QueueError::MissingCapacity`] if [`capacity`](Self::capacity) was never called
    /// - [`QueueError::ZeroCapacity`] if the capacity is zero
    pub fn build<T>(self) -> Result<CircularQueue<T>, QueueError> {
        let capacity = self.capacity.ok_or(QueueError::MissingCapacity)?;
        CircularQueue::try_with_capacity(capacity)
    }
}
