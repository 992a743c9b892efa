//! Cart and line item types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Minimum quantity allowed per line.
pub const MIN_QUANTITY: u32 = 1;

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY: u32 = 99;

/// One (product, quantity) pairing within a cart.
///
/// The product is a snapshot taken at add-to-cart time; later catalog
/// changes do not rewrite lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product when it was added.
    pub product: Product,
    /// Quantity, always within `[MIN_QUANTITY, MAX_QUANTITY]`.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity as i64)
    }
}

/// An ordered sequence of cart lines, insertion order preserved.
///
/// Owned by one browser session; persistence lives in
/// [`CartStore`](crate::cart::CartStore), this type is the pure state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add a product to the cart.
    ///
    /// A line whose product has the same id absorbs the quantity
    /// instead of creating a duplicate; the merged quantity clamps at
    /// [`MAX_QUANTITY`]. A zero quantity is ignored.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            product,
            quantity: quantity.min(MAX_QUANTITY),
        });
    }

    /// Delete the line at `index`; subsequent indices shift down.
    ///
    /// An out-of-range index is ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Overwrite the quantity of the line at `index`.
    ///
    /// A no-op when `quantity` falls outside `[MIN_QUANTITY,
    /// MAX_QUANTITY]` or the index is out of range.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return;
        }
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart entirely.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line subtotals. Empty cart -> 0.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct lines (not the sum of quantities).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
