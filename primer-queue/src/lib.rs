//! # primer-queue
//!
//! A fixed-capacity circular queue (ring buffer).
//!
//! The queue owns a single boxed slice of `capacity` slots plus three cursors:
//! the index of the oldest element, the index of the newest element, and the
//! element count. Cursors advance with `(index + 1) % capacity`, so enqueue,
//! dequeue and peek are O(1) and nothing is ever shifted.
//!
//! ## Design Goals
//!
//! - No allocations after construction
//! - Vacated slots are cleared, so dequeued values are never retained
//! - Full and empty are ordinary states, not errors
//!
//! ## Example
//!
//! ```
//! use primer_queue::CircularQueue;
//!
//! let mut queue = CircularQueue::with_capacity(5);
//! for value in [10, 20, 30, 40, 50] {
//!     queue.enqueue(value);
//! }
//! assert!(queue.is_full());
//! assert_eq!(queue.to_string(), "10 20 30 40 50");
//!
//! assert_eq!(queue.dequeue(), Some(10));
//! assert_eq!(queue.peek(), Some(&20));
//!
//! // Reuses the slot vacated by 10
//! queue.enqueue(60);
//! assert_eq!(queue.to_vec(), Some(vec![20, 30, 40, 50, 60]));
//! ```
//!
//! ## Full and Empty
//!
//! | Operation | Full queue | Empty queue |
//! |-----------|------------|-------------|
//! | [`enqueue`](CircularQueue::enqueue) | silently ignored | - |
//! | [`try_enqueue`](CircularQueue::try_enqueue) | `Err(Full(value))` | - |
//! | [`dequeue`](CircularQueue::dequeue) | - | `None` |
//! | [`peek`](CircularQueue::peek) | - | `None` |
//! | [`to_vec`](CircularQueue::to_vec) | - | `None` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod error;
pub mod ring;

pub use builder::QueueBuilder;
pub use error::{Full, QueueError};
pub use ring::{CircularQueue, Iter};
