//! The paging cursor: selection plus bidirectional one-step traversal.
//!
//! Design notes:
//! - The cursor owns its collaborators. Mutating operations take
//!   `&mut self`, so a data source or resolver cannot re-enter the
//!   cursor while its own call is in flight; the borrow checker turns
//!   that reentrancy hazard into a compile error.
//! - Traversal never looks more than one step past the current item.
//!   Memory stays bounded at one item per slot and at most three live
//!   content handles, however far traversal has travelled.
//! - A step either completes fully or is rejected before any state
//!   mutates; on [`PagingError`] the window is exactly what it was.

use std::mem;

use crate::error::PagingError;
use crate::item::{Direction, PagingItem};
use crate::resolver::ContentResolver;
use crate::source::InfiniteDataSource;
use crate::window::Window;

/// One occupied window slot: an item plus its resolved content.
struct Slot<I, H> {
    item: I,
    handle: H,
}

/// What lies one step past the current item in one direction.
enum Edge<I, H> {
    /// A materialized neighbor with resolved content.
    Item(Slot<I, H>),
    /// The data source returned no further item.
    Boundary,
    /// The data source returned the current item itself; stepping there
    /// is rejected to avoid an infinite self-loop. No content is
    /// resolved for this edge.
    SelfLoop,
}

impl<I, H> Edge<I, H> {
    fn item(&self) -> Option<&I> {
        match self {
            Edge::Item(slot) => Some(&slot.item),
            Edge::Boundary | Edge::SelfLoop => None,
        }
    }

    fn content(&self) -> Option<&H> {
        match self {
            Edge::Item(slot) => Some(&slot.handle),
            Edge::Boundary | Edge::SelfLoop => None,
        }
    }
}

/// Bidirectional, lazily-materialized cursor over an ordered item domain.
///
/// Holds the currently selected item and a 3-slot sliding window
/// (previous, current, next). Each step delegates neighbor discovery to
/// the [`InfiniteDataSource`] and content production to the
/// [`ContentResolver`], releasing the handle of whichever item fell out
/// of the window.
///
/// # Example
///
/// ```rust,ignore
/// let mut cursor = PagingCursor::new(source, resolver, CalendarItem::today());
/// if cursor.current_window().has_next() {
///     cursor.advance()?;
/// }
/// ```
pub struct PagingCursor<I, S, R>
where
    I: PagingItem,
    S: InfiniteDataSource<I>,
    R: ContentResolver<I>,
{
    source: S,
    resolver: R,
    previous: Edge<I, R::Handle>,
    current: Slot<I, R::Handle>,
    next: Edge<I, R::Handle>,
}

impl<I, S, R> PagingCursor<I, S, R>
where
    I: PagingItem,
    S: InfiniteDataSource<I>,
    R: ContentResolver<I>,
{
    /// Creates a cursor selected at `initial`, probing both neighbors and
    /// resolving content for the whole window.
    pub fn new(source: S, mut resolver: R, initial: I) -> Self {
        log::debug!("cursor created at {initial:?}");
        let handle = resolver.resolve(&initial);
        let current = Slot {
            item: initial,
            handle,
        };
        let previous = Self::probe(&source, &mut resolver, &current.item, Direction::Backward);
        let next = Self::probe(&source, &mut resolver, &current.item, Direction::Forward);
        Self {
            source,
            resolver,
            previous,
            current,
            next,
        }
    }

    /// Selects `item` as the new current item, discarding the previous
    /// window entirely. Every handle held so far is released; neighbors
    /// and content are re-resolved from scratch. An absent neighbor is a
    /// boundary, not an error.
    pub fn select(&mut self, item: I) {
        log::debug!("select {item:?}");
        self.release_edge(Direction::Backward);
        self.release_edge(Direction::Forward);
        let handle = self.resolver.resolve(&item);
        let old_current = mem::replace(&mut self.current, Slot { item, handle });
        self.resolver.release(&old_current.item, old_current.handle);
        self.previous = Self::probe(
            &self.source,
            &mut self.resolver,
            &self.current.item,
            Direction::Backward,
        );
        self.next = Self::probe(
            &self.source,
            &mut self.resolver,
            &self.current.item,
            Direction::Forward,
        );
    }

    /// Promotes `next` to `current`.
    ///
    /// Fails up front — with the window untouched — when the forward edge
    /// is a boundary or a rejected self-loop. On success the old
    /// `previous` handle is released and the new `next` is probed and
    /// resolved.
    pub fn advance(&mut self) -> Result<(), PagingError> {
        self.step(Direction::Forward)
    }

    /// Promotes `previous` to `current`; the mirror image of
    /// [`advance`](Self::advance).
    pub fn retreat(&mut self) -> Result<(), PagingError> {
        self.step(Direction::Backward)
    }

    /// Read-only snapshot of the visible window. No side effects.
    pub fn current_window(&self) -> Window<I> {
        Window::new(
            self.previous.item().cloned(),
            self.current.item.clone(),
            self.next.item().cloned(),
        )
    }

    /// Content for the currently selected item.
    pub fn current_content(&self) -> &R::Handle {
        &self.current.handle
    }

    /// Content for the previous item, if one is materialized.
    pub fn previous_content(&self) -> Option<&R::Handle> {
        self.previous.content()
    }

    /// Content for the next item, if one is materialized.
    pub fn next_content(&self) -> Option<&R::Handle> {
        self.next.content()
    }

    /// The injected data source.
    pub fn data_source(&self) -> &S {
        &self.source
    }

    /// The injected resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Releases every live handle and hands the collaborators back.
    pub fn into_parts(mut self) -> (S, R) {
        self.release_edge(Direction::Backward);
        self.release_edge(Direction::Forward);
        let PagingCursor {
            source,
            mut resolver,
            current,
            ..
        } = self;
        resolver.release(&current.item, current.handle);
        (source, resolver)
    }

    fn step(&mut self, direction: Direction) -> Result<(), PagingError> {
        let edge = match direction {
            Direction::Backward => &mut self.previous,
            Direction::Forward => &mut self.next,
        };
        let target = match mem::replace(edge, Edge::Boundary) {
            Edge::Item(slot) => slot,
            Edge::Boundary => return Err(PagingError::BoundaryReached { direction }),
            Edge::SelfLoop => {
                // Keep the marker so repeated attempts stay distinguishable
                // from a plain boundary.
                *edge = Edge::SelfLoop;
                return Err(PagingError::SelfLoopRejected { direction });
            }
        };
        log::debug!("step {direction} to {:?}", target.item);

        // The slot opposite the step direction falls out of the window.
        self.release_edge(direction.opposite());

        let old_current = mem::replace(&mut self.current, target);
        let trailing = Edge::Item(old_current);
        match direction {
            Direction::Forward => {
                self.previous = trailing;
                self.next = Self::probe(
                    &self.source,
                    &mut self.resolver,
                    &self.current.item,
                    Direction::Forward,
                );
            }
            Direction::Backward => {
                self.next = trailing;
                self.previous = Self::probe(
                    &self.source,
                    &mut self.resolver,
                    &self.current.item,
                    Direction::Backward,
                );
            }
        }
        Ok(())
    }

    /// Asks the data source for the neighbor of `reference` in
    /// `direction` and classifies the answer. An item equal to
    /// `reference` becomes [`Edge::SelfLoop`]; an item on the wrong side
    /// of the ordering is accepted but logged, since longer cycles are
    /// undetectable without unbounded memory.
    fn probe(
        source: &S,
        resolver: &mut R,
        reference: &I,
        direction: Direction,
    ) -> Edge<I, R::Handle> {
        let candidate = match direction {
            Direction::Backward => source.item_before(reference),
            Direction::Forward => source.item_after(reference),
        };
        let item = match candidate {
            Some(item) => item,
            None => {
                log::trace!("probe {direction} of {reference:?}: boundary");
                return Edge::Boundary;
            }
        };
        if item == *reference {
            log::warn!("data source returned {reference:?} as its own {direction} neighbor");
            return Edge::SelfLoop;
        }
        let ordered = match direction {
            Direction::Backward => item < *reference,
            Direction::Forward => item > *reference,
        };
        if !ordered {
            log::warn!("{direction} neighbor {item:?} of {reference:?} violates item ordering");
        }
        log::trace!("probe {direction} of {reference:?}: {item:?}");
        let handle = resolver.resolve(&item);
        Edge::Item(Slot { item, handle })
    }

    fn release_edge(&mut self, direction: Direction) {
        let edge = match direction {
            Direction::Backward => &mut self.previous,
            Direction::Forward => &mut self.next,
        };
        if let Edge::Item(slot) = mem::replace(edge, Edge::Boundary) {
            self.resolver.release(&slot.item, slot.handle);
        }
    }
}
