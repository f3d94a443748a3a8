//! # depthbook
//!
//! In-memory buy/sell order store with two interchangeable
//! representations and flat-text persistence.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side) and fixed-point price
//!   conversion
//! - **Book**: The [`Book`] contract plus two stores implementing it -
//!   [`FlatBook`] (unordered, sort-on-read) and [`SortedBook`] (per-side
//!   sorted sequences, sort-on-write)
//! - **Persist**: Line-oriented `price volume side` text format
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: Prices use fixed-point arithmetic (10^8
//!    scaling) converted at the text boundary
//! 2. **Recoverable Errors**: Every expected failure returns a
//!    [`BookError`] and leaves the store unchanged
//! 3. **Invariant on Write**: The sorted store's per-side ordering holds
//!    after every mutation, never best-effort
//! 4. **Synchronous Execution**: Single-threaded stores, one owner, no
//!    async
//!
//! ## Example
//!
//! ```
//! use depthbook::{Book, Order, Side, SortedBook};
//!
//! let mut book = SortedBook::new();
//! book.insert(Order::new(10_000_000_000, 10, Side::Buy));
//! book.insert(Order::new(15_000_000_000, 5, Side::Buy));
//!
//! let top = book.top(Side::Buy, 1);
//! assert_eq!(top[0].price, 15_000_000_000);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, fixed-point price helpers
pub mod types;

/// Book stores: the Book contract, FlatBook, SortedBook
pub mod book;

/// Text persistence: line-oriented order files
pub mod persist;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{Book, FlatBook, SortedBook};
pub use error::BookError;
pub use types::{Order, Side};
