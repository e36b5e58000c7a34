//! Core paging abstraction for Paging-RS: items, capability traits, and the cursor.
//!
//! # Architecture
//!
//! A [`PagingCursor`] holds one selected item and a 3-slot sliding window
//! (previous, current, next) over an ordered domain of [`PagingItem`]s.
//! Neighbors are materialized one step at a time by an
//! [`InfiniteDataSource`], and renderable content for each visible item is
//! produced by a [`ContentResolver`]. Memory stays O(1) no matter how far
//! the user travels, which is what makes unbounded domains (calendar
//! dates, feed offsets) viable.
//!
//! # Example
//!
//! ```rust,ignore
//! use paging_core::{FnDataSource, FnResolver, PagingCursor};
//!
//! let source = FnDataSource::new(|n: &i64| Some(n - 1), |n: &i64| Some(n + 1));
//! let resolver = FnResolver::new(|n: &i64| format!("page {n}"));
//! let mut cursor = PagingCursor::new(source, resolver, 0i64);
//!
//! cursor.advance()?;
//! assert_eq!(*cursor.current_window().current(), 1);
//! # Ok::<(), paging_core::PagingError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod item;
pub mod resolver;
pub mod source;
pub mod window;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cursor::PagingCursor;
pub use error::PagingError;
pub use item::{Direction, PagingItem};
pub use resolver::{ContentResolver, FnResolver};
pub use source::{FiniteDataSource, FnDataSource, InfiniteDataSource};
pub use window::Window;

pub mod prelude {
    pub use crate::cursor::PagingCursor;
    pub use crate::error::PagingError;
    pub use crate::item::{Direction, PagingItem};
    pub use crate::resolver::{ContentResolver, FnResolver};
    pub use crate::source::{FiniteDataSource, FnDataSource, InfiniteDataSource};
    pub use crate::window::Window;
}
