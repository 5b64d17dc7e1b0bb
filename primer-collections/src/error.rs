//! Error types for positional list operations.

use thiserror::Error;

/// Error returned when inserting at a position past the end of a list.
///
/// Carries the rejected value so the caller can recover it.
///
/// # Example
///
/// ```
/// use primer_collections::LinkedList;
///
/// let mut list: LinkedList<u32> = [1, 2].into_iter().collect();
///
/// let err = list.insert(5, 9).unwrap_err();
/// assert_eq!(err.index, 5);
/// assert_eq!(err.len, 2);
/// assert_eq!(err.into_inner(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for list of length {len}")]
pub struct OutOfBounds<T> {
    /// The requested position.
    pub index: usize,
    /// The list length at the time of the call.
    pub len: usize,
    /// The value that could not be inserted.
    pub value: T,
}

impl<T> OutOfBounds<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}
