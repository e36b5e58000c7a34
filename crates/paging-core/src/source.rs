//! Neighbor-producing capability and the provided data sources.
//!
//! An [`InfiniteDataSource`] answers "what comes immediately before/after
//! this item" for the cursor, one step at a time. `None` marks a boundary:
//! a direction in which no further item exists. Implementations must be
//! deterministic and side-effect-free — the cursor re-probes neighbors on
//! every step and relies on equal inputs producing equal outputs.

use std::rc::Rc;

use crate::item::PagingItem;

/// Produces the items adjacent to a given item, on demand.
pub trait InfiniteDataSource<I: PagingItem> {
    /// The item immediately before `item`, or `None` at the backward
    /// boundary.
    fn item_before(&self, item: &I) -> Option<I>;

    /// The item immediately after `item`, or `None` at the forward
    /// boundary.
    fn item_after(&self, item: &I) -> Option<I>;
}

impl<I: PagingItem, T: InfiniteDataSource<I> + ?Sized> InfiniteDataSource<I> for &T {
    fn item_before(&self, item: &I) -> Option<I> {
        (**self).item_before(item)
    }

    fn item_after(&self, item: &I) -> Option<I> {
        (**self).item_after(item)
    }
}

impl<I: PagingItem, T: InfiniteDataSource<I> + ?Sized> InfiniteDataSource<I> for Box<T> {
    fn item_before(&self, item: &I) -> Option<I> {
        (**self).item_before(item)
    }

    fn item_after(&self, item: &I) -> Option<I> {
        (**self).item_after(item)
    }
}

impl<I: PagingItem, T: InfiniteDataSource<I> + ?Sized> InfiniteDataSource<I> for Rc<T> {
    fn item_before(&self, item: &I) -> Option<I> {
        (**self).item_before(item)
    }

    fn item_after(&self, item: &I) -> Option<I> {
        (**self).item_after(item)
    }
}

/// Data source built from a pair of closures.
///
/// The ergonomic form for generated domains where neighbors are computed
/// rather than stored:
///
/// ```rust,ignore
/// let days = FnDataSource::new(
///     |d: &NaiveDate| d.pred_opt(),
///     |d: &NaiveDate| d.succ_opt(),
/// );
/// ```
pub struct FnDataSource<B, A> {
    before: B,
    after: A,
}

impl<B, A> FnDataSource<B, A> {
    pub fn new(before: B, after: A) -> Self {
        Self { before, after }
    }
}

impl<I, B, A> InfiniteDataSource<I> for FnDataSource<B, A>
where
    I: PagingItem,
    B: Fn(&I) -> Option<I>,
    A: Fn(&I) -> Option<I>,
{
    fn item_before(&self, item: &I) -> Option<I> {
        (self.before)(item)
    }

    fn item_after(&self, item: &I) -> Option<I> {
        (self.after)(item)
    }
}

/// Data source over a fixed, finite collection of items.
///
/// Items are sorted and deduplicated on construction; neighbors are found
/// by binary search, and the first/last items are boundaries. An item not
/// present in the collection has no neighbors in either direction.
pub struct FiniteDataSource<I> {
    items: Vec<I>,
}

impl<I: PagingItem> FiniteDataSource<I> {
    pub fn new(mut items: Vec<I>) -> Self {
        items.sort();
        items.dedup();
        Self { items }
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The smallest item, if any.
    pub fn first(&self) -> Option<&I> {
        self.items.first()
    }

    /// The largest item, if any.
    pub fn last(&self) -> Option<&I> {
        self.items.last()
    }
}

impl<I: PagingItem> InfiniteDataSource<I> for FiniteDataSource<I> {
    fn item_before(&self, item: &I) -> Option<I> {
        match self.items.binary_search(item) {
            Ok(index) if index > 0 => Some(self.items[index - 1].clone()),
            Ok(_) => None,
            Err(_) => {
                log::debug!("item {item:?} not in finite domain; treating as boundary");
                None
            }
        }
    }

    fn item_after(&self, item: &I) -> Option<I> {
        match self.items.binary_search(item) {
            Ok(index) => self.items.get(index + 1).cloned(),
            Err(_) => {
                log::debug!("item {item:?} not in finite domain; treating as boundary");
                None
            }
        }
    }
}
