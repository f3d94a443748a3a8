//! Book stores: two alternative representations of the same order book.
//!
//! ## Components
//!
//! - [`FlatBook`]: one unordered list; top-of-book queries sort a snapshot
//!   of the whole collection on every call. O(m log m) per query.
//! - [`SortedBook`]: one sorted sequence per side, kept sorted by every
//!   mutation. Top-of-book is a prefix copy, O(n) in the number of orders
//!   requested and independent of book size.
//!
//! The two stores are mutually exclusive representations of one
//! conceptual book; a session owns exactly one of them.
//!
//! ## Contract
//!
//! The [`Book`] trait is the surface the driver consumes, independent of
//! representation. Mutations are atomic single-step operations: each call
//! either fully succeeds or fails with a recoverable [`BookError`] and
//! leaves the prior state unchanged.

pub mod flat;
pub mod sorted;

pub use flat::FlatBook;
pub use sorted::SortedBook;

use std::path::Path;

use crate::error::BookError;
use crate::persist;
use crate::types::{Order, Side};

/// Common contract of the order stores.
pub trait Book {
    /// Add an order to the store.
    fn insert(&mut self, order: Order);

    /// Overwrite the order at `index` with new price and volume.
    ///
    /// How `index` and `side` are interpreted depends on the
    /// representation; see the implementors. Fails with
    /// [`BookError::IndexOutOfBounds`] if the index is outside the
    /// addressed container, leaving the store unchanged.
    fn modify(
        &mut self,
        index: usize,
        price: u64,
        volume: u64,
        side: Side,
    ) -> Result<(), BookError>;

    /// Remove the order at `index`, shifting subsequent indices down.
    ///
    /// Fails with [`BookError::IndexOutOfBounds`] if the index is outside
    /// the addressed container, leaving the store unchanged.
    fn delete(&mut self, index: usize, side: Side) -> Result<(), BookError>;

    /// The best-priced orders on one side, best first: highest prices for
    /// Buy, lowest for Sell. Returns at most `n` orders.
    fn top(&self, side: Side, n: usize) -> Vec<Order>;

    /// Total number of orders across both sides.
    fn len(&self) -> usize;

    /// Whether the store holds no orders.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every order in the store, in the representation's own
    /// iteration order. Used by [`Book::save`].
    fn snapshot(&self) -> Vec<Order>;

    /// Replace the entire contents of the store. Representations that
    /// maintain an ordering invariant re-establish it here; the input
    /// carries no ordering guarantee.
    fn replace(&mut self, orders: Vec<Order>);

    /// Load the store from a text file, replacing its contents.
    ///
    /// The file is fully parsed before any state changes, so a missing
    /// file or a malformed line leaves the store exactly as it was.
    /// Returns the number of orders loaded.
    fn load(&mut self, path: &Path) -> Result<usize, BookError> {
        let orders = persist::read_orders(path)?;
        let count = orders.len();
        self.replace(orders);
        Ok(count)
    }

    /// Save the store to a text file, truncating any previous contents.
    /// In-memory state is never touched, even on failure. Returns the
    /// number of orders written.
    fn save(&self, path: &Path) -> Result<usize, BookError> {
        persist::write_orders(path, &self.snapshot())
    }
}

/// Bounds-check a positional index against a container length.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), BookError> {
    if index < len {
        Ok(())
    } else {
        Err(BookError::IndexOutOfBounds { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert!(check_index(2, 3).is_ok());
        assert!(matches!(
            check_index(3, 3),
            Err(BookError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(check_index(0, 0).is_err());
    }
}
