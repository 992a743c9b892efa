//! Time-windowed product offers.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A discount annotation attached to a product.
///
/// The product's `price` is expected to already be the discounted price
/// while the offer is effective; `original_price` is always the
/// pre-discount price. The offer decides whether the original price and
/// savings should be displayed, it never computes the discounted price
/// itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Whether the offer is switched on at all.
    pub active: bool,
    /// Pre-discount price.
    pub original_price: Money,
    /// Discount percentage (0-100), for badge display.
    pub discount_percent: u8,
    /// Window start (Unix timestamp, inclusive).
    pub starts_at: i64,
    /// Window end (Unix timestamp, inclusive).
    pub ends_at: i64,
    /// Badge label, e.g. "CYBER".
    pub label: String,
}

impl Offer {
    /// Check whether the offer is effective at `now`.
    ///
    /// An offer reduces displayed prices only when it is active AND the
    /// instant falls within `[starts_at, ends_at]` inclusive. An active
    /// offer outside its window must not trigger discount badges.
    pub fn is_effective(&self, now: i64) -> bool {
        self.active && now >= self.starts_at && now <= self.ends_at
    }

    /// The savings versus the original price.
    ///
    /// Only meaningful while [`Offer::is_effective`] holds; callers gate
    /// on that first.
    pub fn savings(&self, current_price: Money) -> Money {
        self.original_price - current_price
    }
}

/// Convenience over an optional offer: a missing offer is never
/// effective.
pub fn is_offer_effective(offer: Option<&Offer>, now: i64) -> bool {
    offer.map(|o| o.is_effective(now)).unwrap_or(false)
}
