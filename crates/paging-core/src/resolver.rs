//! Content resolution capability.
//!
//! A [`ContentResolver`] turns a paging item into the renderable content
//! for its page. The cursor only ever asks for the currently selected
//! item and its two possible siblings, and it returns every handle
//! through [`ContentResolver::release`] the moment the owning item leaves
//! that 3-slot window. Resolvers that pool or recycle content hook the
//! release callback; resolvers whose handles tear themselves down in
//! `Drop` can leave it empty.

use std::marker::PhantomData;

use crate::item::PagingItem;

/// Produces and reclaims renderable content for paging items.
pub trait ContentResolver<I: PagingItem> {
    /// Opaque renderable content bound to exactly one item.
    type Handle;

    /// Produces the content for `item`. Called once per window entry;
    /// must succeed for any item reachable via the data source. A
    /// consumer with genuinely fallible content can use
    /// `Handle = Result<T, E>` to keep the failure page-local.
    fn resolve(&mut self, item: &I) -> Self::Handle;

    /// Reclaims a handle whose item left the window. Called exactly once
    /// per handle handed out by [`resolve`](Self::resolve), except for
    /// handles still live when the cursor itself is dropped — those are
    /// dropped in place.
    fn release(&mut self, item: &I, handle: Self::Handle);
}

/// Resolver built from a single closure; release is a plain drop.
pub struct FnResolver<F, H> {
    resolve: F,
    _handle: PhantomData<fn() -> H>,
}

impl<F, H> FnResolver<F, H> {
    pub fn new(resolve: F) -> Self {
        Self {
            resolve,
            _handle: PhantomData,
        }
    }
}

impl<I, F, H> ContentResolver<I> for FnResolver<F, H>
where
    I: PagingItem,
    F: FnMut(&I) -> H,
{
    type Handle = H;

    fn resolve(&mut self, item: &I) -> H {
        (self.resolve)(item)
    }

    fn release(&mut self, _item: &I, handle: H) {
        drop(handle);
    }
}
