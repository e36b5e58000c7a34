//! Headless harness for driving a cursor through traversal scenarios.

use paging_core::{PagingCursor, PagingError, Window};

use crate::recorder::RecordingResolver;
use crate::sources::CountingSource;

/// Bundles a [`CountingSource`] and a [`RecordingResolver`] around a
/// cursor over the integer domain, with helpers that keep scenario tests
/// short: a test selects, steps, and asserts windows without touching
/// the collaborators directly.
pub struct CursorTestRule {
    cursor: PagingCursor<i64, CountingSource, RecordingResolver<i64>>,
}

impl CursorTestRule {
    /// Cursor over the unbounded integer domain, selected at `initial`.
    pub fn unbounded(initial: i64) -> Self {
        Self {
            cursor: PagingCursor::new(
                CountingSource::unbounded(),
                RecordingResolver::new(),
                initial,
            ),
        }
    }

    /// Cursor over `min..=max`, selected at `initial`.
    pub fn clamped(min: i64, max: i64, initial: i64) -> Self {
        Self {
            cursor: PagingCursor::new(
                CountingSource::clamped(min, max),
                RecordingResolver::new(),
                initial,
            ),
        }
    }

    pub fn select(&mut self, item: i64) {
        self.cursor.select(item);
    }

    pub fn advance(&mut self) -> Result<(), PagingError> {
        self.cursor.advance()
    }

    pub fn retreat(&mut self) -> Result<(), PagingError> {
        self.cursor.retreat()
    }

    /// Advances `n` times, panicking on the first rejected step.
    pub fn advance_n(&mut self, n: usize) {
        for step in 0..n {
            log::trace!("advance_n step {step}");
            if let Err(error) = self.cursor.advance() {
                panic!("advance {step} of {n} rejected: {error}");
            }
        }
    }

    /// Retreats `n` times, panicking on the first rejected step.
    pub fn retreat_n(&mut self, n: usize) {
        for step in 0..n {
            log::trace!("retreat_n step {step}");
            if let Err(error) = self.cursor.retreat() {
                panic!("retreat {step} of {n} rejected: {error}");
            }
        }
    }

    pub fn window(&self) -> Window<i64> {
        self.cursor.current_window()
    }

    /// Asserts the full window shape in one call.
    #[track_caller]
    pub fn assert_window(&self, previous: Option<i64>, current: i64, next: Option<i64>) {
        let window = self.cursor.current_window();
        assert_eq!(window.previous().copied(), previous, "previous slot");
        assert_eq!(*window.current(), current, "current slot");
        assert_eq!(window.next().copied(), next, "next slot");
    }

    /// Handles currently live in the resolver.
    pub fn live_handles(&self) -> usize {
        self.cursor.resolver().live_count()
    }

    pub fn resolver(&self) -> &RecordingResolver<i64> {
        self.cursor.resolver()
    }

    pub fn source(&self) -> &CountingSource {
        self.cursor.data_source()
    }

    /// Tears the cursor down, asserting that every handle was released.
    pub fn finish(self) {
        let (_, resolver) = self.cursor.into_parts();
        assert_eq!(resolver.live_count(), 0, "handles leaked past teardown");
    }
}
