//! Binary search over sorted slices, iterative and recursive.
//!
//! Both variants search the closed interval `[left, right]` and check
//! `floor((left + right) / 2)`, so for the same input they visit the same
//! indices in the same order and always return the same result. Among
//! duplicates, the index returned is whichever equal element is visited first,
//! not necessarily the leftmost.
//!
//! # Example
//!
//! ```
//! use primer_search::{binary_search, recursive_binary_search};
//!
//! let sorted = [-5, 2, 4, 6, 10];
//! assert_eq!(binary_search(&sorted, &10), Some(4));
//! assert_eq!(recursive_binary_search(&sorted, &20), None);
//! ```
//!
//! Input that is not sorted is not rejected. The search simply follows its
//! midpoints:
//!
//! ```
//! use primer_search::binary_search;
//!
//! // The first midpoint (index 2) happens to hit.
//! assert_eq!(binary_search(&[-5, 2, 10, 4, 6], &10), Some(2));
//! ```
//!
//! # Comparators
//!
//! The `_by` variants take a closure that orders each visited element
//! *relative to the target*: `Less` if the element sorts before the target,
//! `Greater` if after. This matches [`slice::binary_search_by`].
//!
//! ```
//! use primer_search::binary_search_by;
//!
//! // Sorted by length
//! let words = ["fig", "kiwi", "apple", "banana"];
//! let found = binary_search_by(&words, |elem| elem.len().cmp(&5));
//! assert_eq!(found, Some(2));
//! ```

#![warn(missing_docs)]

use std::cmp::Ordering;

/// Iterative binary search for `target` in a slice sorted ascending.
///
/// Returns the index of a matching element, or `None` if absent.
#[inline]
pub fn binary_search<T: Ord>(haystack: &[T], target: &T) -> Option<usize> {
    binary_search_by(haystack, |elem| elem.cmp(target))
}

/// Iterative binary search driven by a comparator.
///
/// `compare` returns the ordering of the visited element relative to the
/// target.
pub fn binary_search_by<T, F>(haystack: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    let mut right = haystack.len().checked_sub(1)?;

    while left <= right {
        let middle = midpoint(left, right);
        tracing::trace!(left, right, middle, "visit");

        match compare(&haystack[middle]) {
            Ordering::Equal => return Some(middle),
            // Target sorts before the middle; nothing left of index 0.
            Ordering::Greater => right = middle.checked_sub(1)?,
            Ordering::Less => left = middle + 1,
        }
    }
    None
}

/// Recursive binary search for `target` in a slice sorted ascending.
///
/// Same visit order and result as [`binary_search`]. Recursion depth is
/// `O(log n)`.
#[inline]
pub fn recursive_binary_search<T: Ord>(haystack: &[T], target: &T) -> Option<usize> {
    recursive_binary_search_by(haystack, |elem| elem.cmp(target))
}

/// Recursive binary search driven by a comparator.
pub fn recursive_binary_search_by<T, F>(haystack: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let right = haystack.len().checked_sub(1)?;
    search_range(haystack, &mut compare, 0, right)
}

fn search_range<T, F>(haystack: &[T], compare: &mut F, left: usize, right: usize) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if left > right {
        return None;
    }

    let middle = midpoint(left, right);
    tracing::trace!(left, right, middle, "visit");

    match compare(&haystack[middle]) {
        Ordering::Equal => Some(middle),
        Ordering::Greater => search_range(haystack, compare, left, middle.checked_sub(1)?),
        Ordering::Less => search_range(haystack, compare, middle + 1, right),
    }
}

/// `floor((left + right) / 2)` without overflow. Requires `left <= right`.
#[inline]
fn midpoint(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}
