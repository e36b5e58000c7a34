//! The visible 3-slot window snapshot.

use smallvec::SmallVec;

use crate::item::PagingItem;

/// Ordered (previous, current, next) triple describing what a cursor can
/// show right now.
///
/// `current` is always present; `previous`/`next` are absent at a
/// boundary. When present they bracket `current` in the item ordering —
/// a snapshot that violates `previous < current < next` points at a
/// non-monotonic data source and is logged at `warn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<I> {
    previous: Option<I>,
    current: I,
    next: Option<I>,
}

impl<I: PagingItem> Window<I> {
    pub fn new(previous: Option<I>, current: I, next: Option<I>) -> Self {
        if let Some(prev) = &previous {
            if prev >= &current {
                log::warn!("window ordering violated: previous {prev:?} >= current {current:?}");
            }
        }
        if let Some(next_item) = &next {
            if next_item <= &current {
                log::warn!("window ordering violated: next {next_item:?} <= current {current:?}");
            }
        }
        Self {
            previous,
            current,
            next,
        }
    }

    /// The item before the current one, absent at the backward boundary.
    pub fn previous(&self) -> Option<&I> {
        self.previous.as_ref()
    }

    /// The currently selected item.
    pub fn current(&self) -> &I {
        &self.current
    }

    /// The item after the current one, absent at the forward boundary.
    pub fn next(&self) -> Option<&I> {
        self.next.as_ref()
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The present items in traversal order.
    pub fn items(&self) -> SmallVec<[&I; 3]> {
        let mut items = SmallVec::new();
        if let Some(prev) = &self.previous {
            items.push(prev);
        }
        items.push(&self.current);
        if let Some(next) = &self.next {
            items.push(next);
        }
        items
    }
}
