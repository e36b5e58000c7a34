//! Instrumented data sources over the integer domain.

use std::cell::Cell;
use std::ops::RangeInclusive;

use paging_core::InfiniteDataSource;

/// Integer data source (`before = n - 1`, `after = n + 1`) that counts
/// every probe.
///
/// Unbounded by default; [`clamped`](CountingSource::clamped) restricts
/// the domain to an inclusive range, turning its ends into boundaries.
/// The probe counters let tests assert that a cursor never looks more
/// than one step past the window.
pub struct CountingSource {
    bounds: Option<RangeInclusive<i64>>,
    before_calls: Cell<usize>,
    after_calls: Cell<usize>,
}

impl CountingSource {
    /// Unbounded in both directions (up to the `i64` range itself).
    pub fn unbounded() -> Self {
        Self {
            bounds: None,
            before_calls: Cell::new(0),
            after_calls: Cell::new(0),
        }
    }

    /// Domain restricted to `min..=max`.
    pub fn clamped(min: i64, max: i64) -> Self {
        Self {
            bounds: Some(min..=max),
            before_calls: Cell::new(0),
            after_calls: Cell::new(0),
        }
    }

    /// Number of `item_before` probes so far.
    pub fn before_calls(&self) -> usize {
        self.before_calls.get()
    }

    /// Number of `item_after` probes so far.
    pub fn after_calls(&self) -> usize {
        self.after_calls.get()
    }

    /// Total probes in both directions.
    pub fn total_probes(&self) -> usize {
        self.before_calls.get() + self.after_calls.get()
    }

    fn admit(&self, candidate: i64) -> Option<i64> {
        match &self.bounds {
            Some(bounds) if !bounds.contains(&candidate) => None,
            _ => Some(candidate),
        }
    }
}

impl InfiniteDataSource<i64> for CountingSource {
    fn item_before(&self, item: &i64) -> Option<i64> {
        self.before_calls.set(self.before_calls.get() + 1);
        item.checked_sub(1).and_then(|n| self.admit(n))
    }

    fn item_after(&self, item: &i64) -> Option<i64> {
        self.after_calls.set(self.after_calls.get() + 1);
        item.checked_add(1).and_then(|n| self.admit(n))
    }
}
