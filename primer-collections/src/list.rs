//! Singly-linked list with slab-backed node storage.
//!
//! Nodes live in a [`slab::Slab`], linked by slab keys rather than pointers.
//! The list tracks `head`, `tail` and `len`; the `tail` cursor makes
//! [`append`](LinkedList::append) O(1). Positional operations walk from the
//! head and are O(n).
//!
//! ```text
//!   head                         tail
//!    │                            │
//!    ▼                            ▼
//!  ┌────┬───┐   ┌────┬───┐   ┌────┬──────┐
//!  │ 40 │ ●─┼──►│ 30 │ ●─┼──►│ 20 │ NONE │
//!  └────┴───┘   └────┴───┘   └────┴──────┘
//! ```
//!
//! # Example
//!
//! ```
//! use primer_collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.prepend(20);
//! list.prepend(30);
//! list.append(10);
//! assert_eq!(list.to_string(), "30 -> 20 -> 10");
//!
//! list.insert(1, 25).unwrap();
//! assert_eq!(list.search(&25), Some(1));
//!
//! assert_eq!(list.remove_value(&20), Some(20));
//! list.reverse();
//! assert_eq!(list.to_string(), "10 -> 25 -> 30");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use slab::Slab;

use crate::{Link, OutOfBounds};

/// A node in the list: the value plus the key of its successor.
struct Node<T> {
    value: T,
    next: usize,
}

/// A singly-linked list over a slab of nodes.
///
/// Removed nodes free their slab slot for reuse, so a list that churns at a
/// stable size stops allocating.
pub struct LinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// node slab reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts a value at the front of the list. O(1).
    pub fn prepend(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
    }

    /// Inserts a value at the back of the list. O(1).
    pub fn append(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            next: usize::NONE,
        });
        if self.tail.is_none() {
            self.head = key;
        } else {
            self.nodes[self.tail].next = key;
        }
        self.tail = key;
        self.len += 1;
    }

    /// Inserts a value so that it ends up at position `index`.
    ///
    /// `index` may equal `len()`, which appends.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] carrying the value if `index > len()`.
    /// The list is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBounds<T>> {
        if index > self.len {
            tracing::debug!(index, len = self.len, "list insert out of bounds");
            return Err(OutOfBounds {
                index,
                len: self.len,
                value,
            });
        }

        if index == 0 {
            self.prepend(value);
        } else if index == self.len {
            self.append(value);
        } else {
            let prev = self.key_at(index - 1);
            let next = self.nodes[prev].next;
            let key = self.nodes.insert(Node { value, next });
            self.nodes[prev].next = key;
            self.len += 1;
        }
        Ok(())
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the element at position `index`.
    ///
    /// Returns `None` if `index >= len()`.
    pub fn remove_from(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let prev = if index == 0 {
            usize::NONE
        } else {
            self.key_at(index - 1)
        };
        Some(self.unlink_after(prev))
    }

    /// Removes and returns the front element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_from(0)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` if no element matches.
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut prev = usize::NONE;
        let mut curr = self.head;
        while curr.is_some() {
            let node = &self.nodes[curr];
            if node.value == *value {
                return Some(self.unlink_after(prev));
            }
            prev = curr;
            curr = node.next;
        }
        None
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the position of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    /// Returns a reference to the element at position `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.nodes[self.key_at(index)].value)
    }

    /// Returns a mutable reference to the element at position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let key = self.key_at(index);
        Some(&mut self.nodes[key].value)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.get().map(|key| &self.nodes[key].value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.get().map(|key| &self.nodes[key].value)
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Reverses the list in place by relinking nodes. O(n), no allocation.
    pub fn reverse(&mut self) {
        let mut prev = usize::NONE;
        let mut curr = self.head;
        while curr.is_some() {
            let next = self.nodes[curr].next;
            self.nodes[curr].next = prev;
            prev = curr;
            curr = next;
        }
        self.tail = self.head;
        self.head = prev;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Returns the slab key of the node at `index`.
    ///
    /// Caller guarantees `index < len`.
    fn key_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        let mut key = self.head;
        for _ in 0..index {
            key = self.nodes[key].next;
        }
        key
    }

    /// Unlinks the node following `prev` (or the head if `prev` is NONE)
    /// and returns its value.
    ///
    /// Caller guarantees such a node exists.
    fn unlink_after(&mut self, prev: usize) -> T {
        let key = if prev.is_none() {
            self.head
        } else {
            self.nodes[prev].next
        };
        let node = self.nodes.remove(key);

        if prev.is_none() {
            self.head = node.next;
        } else {
            self.nodes[prev].next = node.next;
        }
        if self.tail == key {
            self.tail = prev;
        }
        self.len -= 1;
        node.value
    }
}

// =============================================================================
// Trait impls
// =============================================================================

/// Renders the elements front to back joined by ` -> `.
///
/// An empty list renders as `List is empty`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("List is empty");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    next: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let node = &self.nodes[self.next];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
