//! Paging item contract and traversal direction.

use std::fmt;
use std::hash::Hash;

/// Logical position token for one page.
///
/// Two items representing the same logical position must compare equal
/// (and hash equal) regardless of when they were constructed, and the
/// ordering must agree with traversal: whenever a data source yields them,
/// `before(x) < x < after(x)`.
///
/// This is a bound alias with a blanket impl: any `Clone + Eq + Ord +
/// Hash + Debug` type is a paging item. The cursor is generic over one
/// concrete item type, so there is no downcasting anywhere in the window
/// pipeline.
pub trait PagingItem: Clone + Eq + Ord + Hash + fmt::Debug {}

impl<T: Clone + Eq + Ord + Hash + fmt::Debug> PagingItem for T {}

/// Traversal direction of a cursor step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller items (`retreat`, `item_before`).
    Backward,
    /// Toward larger items (`advance`, `item_after`).
    Forward,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Forward => Direction::Backward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => write!(f, "backward"),
            Direction::Forward => write!(f, "forward"),
        }
    }
}
