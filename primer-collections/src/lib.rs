//! Textbook collections: a singly-linked list and a stack.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`LinkedList`] | positional edits | O(1) prepend/append, O(n) insert/remove/search |
//! | [`Stack`] | LIFO work lists, undo history | O(1) push/pop/peek |
//!
//! # Storage
//!
//! [`LinkedList`] keeps its nodes in a [`slab::Slab`] and links them by slab
//! key instead of by pointer. A key of `usize::MAX` ([`Link::NONE`]) marks the
//! end of the list:
//!
//! ```text
//! Slab<Node<T>>  - owns node values, reuses freed slots
//! LinkedList     - head/tail keys and a length
//! ```
//!
//! This keeps the list free of `unsafe`, and a list that removes as often as
//! it inserts stops allocating once the slab has grown to its working size.
//!
//! # Absence is `None`
//!
//! Nothing here panics on an empty structure or a bad position. Reads and
//! removals that find nothing return `None`; a positional insert past the
//! end returns [`OutOfBounds`] with the value handed back.
//!
//! ```
//! use primer_collections::{LinkedList, Stack};
//!
//! let mut stack: Stack<u32> = Stack::new();
//! assert_eq!(stack.pop(), None);
//!
//! let mut list: LinkedList<u32> = LinkedList::new();
//! assert_eq!(list.remove_from(3), None);
//! assert!(list.insert(1, 7).is_err());
//! ```

#![warn(missing_docs)]

pub mod link;
pub mod list;
pub mod stack;

mod error;

pub use error::OutOfBounds;
pub use link::Link;
pub use list::LinkedList;
pub use stack::Stack;
