//! Flat list store: one unordered collection, sort-on-read.
//!
//! ## Design
//!
//! Orders live in a single `Vec` in insertion order. Nothing is sorted
//! until a top-of-book query, which sorts a snapshot of the whole
//! collection by the composite [`Order::book_key`] and scans the prefix.
//! Insertion is O(1) amortized; every query is O(m log m) regardless of
//! how few orders it asks for. The sorted dual-sequence store exists to
//! remove exactly that cost.
//!
//! ## Indexing
//!
//! Positional indices address the whole list, not one side. The `side`
//! argument of [`Book::delete`] is therefore ignored here, and the `side`
//! argument of [`Book::modify`] is the new side value written into the
//! addressed order.

use crate::book::{check_index, Book};
use crate::error::BookError;
use crate::types::{Order, Side};

/// Unordered order store backed by a single `Vec`.
///
/// ## Example
///
/// ```
/// use depthbook::book::{Book, FlatBook};
/// use depthbook::types::{Order, Side};
///
/// let mut book = FlatBook::new();
/// book.insert(Order::new(10_000_000_000, 10, Side::Buy));
/// book.insert(Order::new(15_000_000_000, 5, Side::Buy));
///
/// let top = book.top(Side::Buy, 1);
/// assert_eq!(top[0].price, 15_000_000_000);
/// ```
#[derive(Debug, Default)]
pub struct FlatBook {
    orders: Vec<Order>,
}

impl FlatBook {
    /// Create a new empty store
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Vec::with_capacity(capacity),
        }
    }

    /// All orders in insertion order
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl Book for FlatBook {
    /// Append unconditionally; no ordering is maintained.
    fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Overwrite price, volume, and side of the order at `index`.
    fn modify(
        &mut self,
        index: usize,
        price: u64,
        volume: u64,
        side: Side,
    ) -> Result<(), BookError> {
        check_index(index, self.orders.len())?;
        self.orders[index] = Order::new(price, volume, side);
        Ok(())
    }

    /// Remove the order at `index`. The flat layout addresses orders
    /// globally, so `side` is ignored.
    fn delete(&mut self, index: usize, _side: Side) -> Result<(), BookError> {
        check_index(index, self.orders.len())?;
        self.orders.remove(index);
        Ok(())
    }

    /// Stable sort of a snapshot by `(side rank, monotone price key)`,
    /// then emit up to `n` orders of the requested side. The snapshot
    /// keeps positional indices stable across queries.
    fn top(&self, side: Side, n: usize) -> Vec<Order> {
        let mut sorted = self.orders.clone();
        sorted.sort_by_key(Order::book_key);

        sorted
            .into_iter()
            .filter(|o| o.side == side)
            .take(n)
            .collect()
    }

    fn len(&self) -> usize {
        self.orders.len()
    }

    fn snapshot(&self) -> Vec<Order> {
        self.orders.clone()
    }

    fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
