//! Fixed-capacity circular queue.
//!
//! Memory layout (single allocation, never resized):
//!
//! ```text
//! capacity = 5, after enqueue 10..=50, dequeue, enqueue 60
//!
//!   slot:   [0]   [1]   [2]   [3]   [4]
//!           60    20    30    40    50
//!            ^     ^
//!          rear  front
//! ```
//!
//! The queue contains the circular range `[front, rear]`. Both cursors hold
//! [`CURSOR_NONE`] while the queue is empty.

use std::fmt;
use std::iter::FusedIterator;

use crate::{Full, QueueError};

/// Sentinel cursor value for an empty queue.
pub(crate) const CURSOR_NONE: usize = usize::MAX;

/// A FIFO queue with a fixed number of slots.
///
/// # Example
///
/// ```
/// use primer_queue::CircularQueue;
///
/// let mut queue = CircularQueue::with_capacity(2);
/// queue.enqueue('a');
/// queue.enqueue('b');
/// queue.enqueue('c'); // full: ignored
///
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.dequeue(), Some('b'));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct CircularQueue<T> {
    /// Slot storage. `Some` exactly on the occupied range.
    slots: Box<[Option<T>]>,
    /// Oldest occupied slot, or `CURSOR_NONE`.
    front: usize,
    /// Newest occupied slot, or `CURSOR_NONE`.
    rear: usize,
    /// Number of occupied slots.
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`try_with_capacity`](Self::try_with_capacity)
    /// or [`QueueBuilder`](crate::QueueBuilder) when the capacity is not a constant.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self::allocate(capacity)
    }

    /// Creates an empty queue with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::ZeroCapacity`] if `capacity` is 0.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        tracing::trace!(capacity, "allocating circular queue");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: CURSOR_NONE,
            rear: CURSOR_NONE,
            len: 0,
        }
    }

    // === Accessors ===

    /// Returns the number of slots. Fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the slot index of the oldest element, or `None` if empty.
    #[inline]
    pub fn front_index(&self) -> Option<usize> {
        (self.front != CURSOR_NONE).then_some(self.front)
    }

    /// Returns the slot index of the newest element, or `None` if empty.
    #[inline]
    pub fn rear_index(&self) -> Option<usize> {
        (self.rear != CURSOR_NONE).then_some(self.rear)
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    // === Operations ===

    /// Adds a value at the rear of the queue.
    ///
    /// If the queue is full this is a no-op: the value is dropped and the
    /// contents are unchanged. Use [`try_enqueue`](Self::try_enqueue) to get
    /// the value back instead.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        if self.try_enqueue(value).is_err() {
            tracing::debug!(capacity = self.capacity(), "queue full, value dropped");
        }
    }

    /// Adds a value at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the queue is full. The queue is unchanged.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }

        let rear = if self.rear == CURSOR_NONE {
            0
        } else {
            self.advance(self.rear)
        };
        self.slots[rear] = Some(value);
        self.rear = rear;
        self.len += 1;

        if self.front == CURSOR_NONE {
            self.front = rear;
        }
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// Returns `None` if the queue is empty. Removing the last element resets
    /// both cursors, so the next enqueue starts again at slot 0.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.front].take();
        debug_assert!(value.is_some(), "front slot must be occupied");
        self.front = self.advance(self.front);
        self.len -= 1;

        if self.len == 0 {
            self.front = CURSOR_NONE;
            self.rear = CURSOR_NONE;
        }
        value
    }

    /// Returns a reference to the oldest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Removes every element, dropping them in FIFO order.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Returns an iterator over the elements, front to rear.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            next: if self.is_empty() { 0 } else { self.front },
            remaining: self.len,
        }
    }

    /// Returns the elements in front-to-rear order.
    ///
    /// An empty queue yields `None` rather than an empty vector, so callers
    /// can distinguish "nothing queued" from a queue they failed to fill.
    pub fn to_vec(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        if self.is_empty() {
            return None;
        }
        Some(self.iter().cloned().collect())
    }
}

/// Renders the elements front to rear, separated by single spaces.
///
/// An empty queue renders as `Queue is Empty`.
impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Queue is Empty");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("front", &self.front_index())
            .field("rear", &self.rear_index())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over a [`CircularQueue`], front to rear.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    next: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots[self.next].as_ref();
        self.next = (self.next + 1) % self.slots.len();
        self.remaining -= 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
