//! Sorted dual-sequence store: one ordered sequence per side.
//!
//! ## Design
//!
//! Bids and asks live in independent `Vec`s, each kept sorted at all
//! times: bids non-increasing by price (best bid first), asks
//! non-decreasing (best ask first). Every insert binary-searches the
//! insertion point and shifts the tail, so the ordering invariant is a
//! post-condition of every mutation and top-of-book is a prefix copy
//! with no sort step - O(n) in the orders requested, independent of
//! book size.
//!
//! ## Tie policy
//!
//! Orders at an equal price queue FIFO: a new order is placed after all
//! resting orders of the same price. The insertion search and the bulk
//! re-sort on load both preserve this.
//!
//! ## Modify
//!
//! `modify` is remove-then-reinsert. The legacy behavior of patching the
//! price in place could leave a sequence out of order; re-inserting makes
//! the invariant unconditional at the cost of a second linear shift. The
//! `side` argument selects which sequence is addressed; the order stays
//! on that side.
//!
//! ## Indexing
//!
//! Positional indices address one side's sequence, so index 0 is always
//! the best-priced order of that side. Indices shift on every structural
//! change, exactly as in the flat store.

use crate::book::{check_index, Book};
use crate::error::BookError;
use crate::types::{Order, Side};

/// Order store with one price-sorted sequence per side.
///
/// ## Example
///
/// ```
/// use depthbook::book::{Book, SortedBook};
/// use depthbook::types::{Order, Side};
///
/// let mut book = SortedBook::new();
/// book.insert(Order::new(10_000_000_000, 10, Side::Buy));
/// book.insert(Order::new(15_000_000_000, 5, Side::Buy));
/// book.insert(Order::new(12_000_000_000, 8, Side::Buy));
///
/// // Best bid first, no sort at query time
/// let prices: Vec<u64> = book.bids().iter().map(|o| o.price).collect();
/// assert_eq!(prices, vec![15_000_000_000, 12_000_000_000, 10_000_000_000]);
/// ```
#[derive(Debug, Default)]
pub struct SortedBook {
    /// Buy orders, non-increasing by price
    bids: Vec<Order>,
    /// Sell orders, non-decreasing by price
    asks: Vec<Order>,
}

impl SortedBook {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Create a store with pre-allocated per-side capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bids: Vec::with_capacity(capacity),
            asks: Vec::with_capacity(capacity),
        }
    }

    /// Buy orders, best (highest price) first
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Sell orders, best (lowest price) first
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// Number of orders on one side
    pub fn side_len(&self, side: Side) -> usize {
        self.sequence(side).len()
    }

    /// The best-priced order on one side, if any
    pub fn best(&self, side: Side) -> Option<&Order> {
        self.sequence(side).first()
    }

    fn sequence(&self, side: Side) -> &Vec<Order> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn sequence_mut(&mut self, side: Side) -> &mut Vec<Order> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// First position where `order` can go without breaking the side's
    /// ordering, past all resting orders of equal price (FIFO ties).
    /// Binary search: the sequence is sorted by construction.
    fn insertion_point(sequence: &[Order], order: &Order) -> usize {
        match order.side {
            Side::Buy => sequence.partition_point(|o| o.price >= order.price),
            Side::Sell => sequence.partition_point(|o| o.price <= order.price),
        }
    }

    #[cfg(debug_assertions)]
    fn assert_sorted(&self) {
        debug_assert!(self.bids.windows(2).all(|w| w[0].price >= w[1].price));
        debug_assert!(self.asks.windows(2).all(|w| w[0].price <= w[1].price));
    }
}

impl Book for SortedBook {
    /// Sorted insertion into the sequence matching the order's side:
    /// logarithmic locate, linear shift. The ordering invariant holds
    /// when this returns.
    fn insert(&mut self, order: Order) {
        let sequence = self.sequence_mut(order.side);
        let at = Self::insertion_point(sequence, &order);
        sequence.insert(at, order);

        #[cfg(debug_assertions)]
        self.assert_sorted();
    }

    /// Remove the order at `index` of `side`'s sequence, update its price
    /// and volume, and re-insert it through the sorted insertion path.
    fn modify(
        &mut self,
        index: usize,
        price: u64,
        volume: u64,
        side: Side,
    ) -> Result<(), BookError> {
        check_index(index, self.sequence(side).len())?;

        let mut order = self.sequence_mut(side).remove(index);
        order.price = price;
        order.volume = volume;
        self.insert(order);
        Ok(())
    }

    /// Remove the order at `index` of `side`'s sequence. Removal from a
    /// sorted sequence cannot break its order.
    fn delete(&mut self, index: usize, side: Side) -> Result<(), BookError> {
        check_index(index, self.sequence(side).len())?;
        self.sequence_mut(side).remove(index);
        Ok(())
    }

    /// Prefix copy of the side's sequence: the invariant guarantees the
    /// first `min(n, len)` orders are the best-priced ones, already in
    /// best-first order.
    fn top(&self, side: Side, n: usize) -> Vec<Order> {
        let sequence = self.sequence(side);
        sequence[..n.min(sequence.len())].to_vec()
    }

    fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Bids best-first, then asks best-first.
    fn snapshot(&self) -> Vec<Order> {
        let mut all = Vec::with_capacity(self.len());
        all.extend_from_slice(&self.bids);
        all.extend_from_slice(&self.asks);
        all
    }

    /// Partition the input by side and sort each sequence explicitly.
    /// The input carries no ordering guarantee (a freshly loaded file,
    /// for instance), so the invariant is re-established here rather
    /// than assumed. Stable sort keeps input order among equal prices.
    fn replace(&mut self, orders: Vec<Order>) {
        self.bids.clear();
        self.asks.clear();
        for order in orders {
            self.sequence_mut(order.side).push(order);
        }

        self.bids.sort_by(|a, b| b.price.cmp(&a.price));
        self.asks.sort_by(|a, b| a.price.cmp(&b.price));

        #[cfg(debug_assertions)]
        self.assert_sorted();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
