//! Resolver double that records the full content handle lifecycle.

use std::collections::BTreeMap;

use paging_core::{ContentResolver, PagingItem};

/// One resolver lifecycle event, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolverEvent<I> {
    Resolved { item: I, ticket: u64 },
    Released { item: I, ticket: u64 },
}

/// Resolver whose handles are monotonically numbered tickets.
///
/// Every resolve and release is appended to an event log, and the live
/// ticket set is tracked so tests can assert the 3-handle window bound
/// and that nothing leaks. Releasing a ticket that is not live panics —
/// a double release is a cursor bug, and tests should fail loudly on it.
#[derive(Default)]
pub struct RecordingResolver<I> {
    next_ticket: u64,
    live: BTreeMap<u64, I>,
    events: Vec<ResolverEvent<I>>,
}

impl<I: PagingItem> RecordingResolver<I> {
    pub fn new() -> Self {
        Self {
            next_ticket: 0,
            live: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Number of handles currently live (resolved but not released).
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// The items whose handles are currently live, in item order.
    pub fn live_items(&self) -> Vec<I> {
        let mut items: Vec<I> = self.live.values().cloned().collect();
        items.sort();
        items
    }

    /// The full lifecycle log, oldest first.
    pub fn events(&self) -> &[ResolverEvent<I>] {
        &self.events
    }

    /// Total resolves so far.
    pub fn resolved_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ResolverEvent::Resolved { .. }))
            .count()
    }

    /// Total releases so far.
    pub fn released_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ResolverEvent::Released { .. }))
            .count()
    }
}

impl<I: PagingItem> ContentResolver<I> for RecordingResolver<I> {
    type Handle = u64;

    fn resolve(&mut self, item: &I) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.live.insert(ticket, item.clone());
        self.events.push(ResolverEvent::Resolved {
            item: item.clone(),
            ticket,
        });
        ticket
    }

    fn release(&mut self, item: &I, handle: u64) {
        let owner = self.live.remove(&handle);
        assert_eq!(
            owner.as_ref(),
            Some(item),
            "released ticket {handle} does not belong to {item:?}"
        );
        self.events.push(ResolverEvent::Released {
            item: item.clone(),
            ticket: handle,
        });
    }
}
