//! Order and side types for the depthbook stores.
//!
//! ## Fixed-Point Representation
//!
//! Prices are stored as u64 scaled by 10^8 (SCALE constant in the price
//! module). This provides 8 decimal places of precision without
//! floating-point errors. Volumes are whole units and stored unscaled.
//!
//! ## Identity
//!
//! An order has no identity beyond its position in a store: mutations
//! address "the order currently at index i", and that meaning shifts after
//! any structural change. This is a deliberate property of the design.

use std::fmt;

use crate::types::price;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell.
///
/// The enumeration is closed: the only recognized text tokens are the
/// case-sensitive literals `Buy` and `Sell`. Anything else is rejected at
/// the parsing boundary rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - best price is the highest
    #[default]
    Buy,
    /// Sell order (ask) - best price is the lowest
    Sell,
}

impl Side {
    /// The exact token used in the text persistence format
    pub fn token(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    /// Parse a persistence token. Case-sensitive, exact match only.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Buy" => Some(Side::Buy),
            "Sell" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Rank used by the flat store's composite sort key: all Buy orders
    /// collectively precede all Sell orders.
    pub fn rank(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A price order held by one of the book stores.
///
/// ## Example
///
/// ```
/// use depthbook::types::{Order, Side};
///
/// // Buy 10 units at price 100
/// let order = Order::new(100 * 100_000_000, 10, Side::Buy);
/// assert_eq!(order.side, Side::Buy);
/// assert_eq!(order.volume, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Price in fixed-point (scaled by 10^8)
    pub price: u64,

    /// Volume in whole units
    pub volume: u64,

    /// Buy or Sell
    pub side: Side,
}

impl Order {
    /// Create a new order.
    ///
    /// Positive price and volume are expected but not enforced here;
    /// validation is a boundary concern, not a store concern.
    pub fn new(price: u64, volume: u64, side: Side) -> Self {
        Self {
            price,
            volume,
            side,
        }
    }

    /// Monotone sort key for a mixed-side collection: ascending order on
    /// this key puts all bids before all asks, bids best-first (highest
    /// price), asks best-first (lowest price). Flipping the bid price
    /// yields one total order instead of a three-way comparator whose
    /// strict-weak-ordering validity would be easy to break.
    pub fn book_key(&self) -> (u8, u64) {
        let price_key = match self.side {
            Side::Buy => u64::MAX - self.price,
            Side::Sell => self.price,
        };
        (self.side.rank(), price_key)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Price: {}, Volume: {}, Side: {}",
            price::format_fixed(self.price),
            self.volume,
            self.side
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
