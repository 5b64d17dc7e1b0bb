//! Node links that encode "no successor" in-band.
//!
//! A list node stores its successor's slab key directly. `usize::MAX` is
//! never handed out by the slab, so it doubles as the end marker and
//! `Node::next` stays one word wide.

/// A slab key that reserves its maximum value as the end-of-list marker.
///
/// # Example
///
/// ```
/// use primer_collections::Link;
///
/// let key: usize = 5;
/// let end: usize = usize::NONE;
///
/// assert!(key.is_some());
/// assert!(end.is_none());
/// assert_eq!(end.get(), None);
/// ```
pub trait Link: Copy + Eq {
    /// The end-of-list marker.
    const NONE: Self;

    /// Returns `true` at the end of the list.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this points at a node.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the key, or `None` at the end of the list.
    #[inline]
    fn get(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

/// Slab keys are `usize`, and `Slab` never hands out `usize::MAX`.
impl Link for usize {
    const NONE: Self = usize::MAX;
}
