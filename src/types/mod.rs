//! Core data types for depthbook.
//!
//! ## Types
//!
//! - [`Order`]: A price order held by a store
//! - [`Side`]: Buy or Sell
//!
//! ## Fixed-Point Arithmetic
//!
//! Prices are stored as `u64` scaled by 10^8; the [`price`] module is the
//! conversion boundary to and from decimal strings.

mod order;
pub mod price;

// Re-export all types at module level
pub use order::{Order, Side};
