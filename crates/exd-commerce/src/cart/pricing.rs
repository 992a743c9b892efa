//! Pure pricing formulas: shipping threshold, IVA backout, checkout
//! totals.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Orders above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(50000);

/// Flat shipping fee below the threshold.
pub const FLAT_SHIPPING_FEE: Money = Money::new(5000);

/// IVA rate: 19%.
const IVA_RATE: f64 = 0.19;

/// Shipping fee for a given subtotal: free strictly above 50.000 CLP,
/// otherwise 5.000 CLP flat.
pub fn shipping_fee(subtotal: Money) -> Money {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        FLAT_SHIPPING_FEE
    }
}

/// Net/tax split of a tax-inclusive total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxBreakdown {
    /// Net amount before IVA.
    pub net: Money,
    /// IVA portion.
    pub tax: Money,
}

/// Back the 19% IVA out of a tax-inclusive total.
///
/// `net` rounds to the nearest peso and `tax` absorbs the remainder, so
/// `net + tax` always reconstructs the input exactly.
pub fn tax_backout(total_inclusive: Money) -> TaxBreakdown {
    let net = Money::new((total_inclusive.amount() as f64 / (1.0 + IVA_RATE)).round() as i64);
    TaxBreakdown {
        net,
        tax: total_inclusive - net,
    }
}

/// The numeric outputs the receipt needs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutTotals {
    /// Cart total before shipping.
    pub subtotal: Money,
    /// Shipping fee at the current threshold.
    pub shipping_fee: Money,
    /// Amount the customer is charged.
    pub total: Money,
}

impl CheckoutTotals {
    /// Compute the totals for a cart.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        let fee = shipping_fee(subtotal);
        Self {
            subtotal,
            shipping_fee: fee,
            total: subtotal + fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_threshold() {
        assert_eq!(shipping_fee(Money::new(0)), Money::new(5000));
        assert_eq!(shipping_fee(Money::new(50000)), Money::new(5000));
        assert_eq!(shipping_fee(Money::new(50001)), Money::zero());
        assert_eq!(shipping_fee(Money::new(120000)), Money::zero());
    }

    #[test]
    fn test_tax_backout_known_values() {
        let b = tax_backout(Money::new(11900));
        assert_eq!(b.net, Money::new(10000));
        assert_eq!(b.tax, Money::new(1900));

        let b = tax_backout(Money::new(119000));
        assert_eq!(b.net, Money::new(100000));
        assert_eq!(b.tax, Money::new(19000));
    }

    #[test]
    fn test_tax_backout_roundtrip_is_exact() {
        for total in [0, 1, 11900, 50000, 119000, 123457, 999999, 30000] {
            let total = Money::new(total);
            let b = tax_backout(total);
            assert_eq!(b.net + b.tax, total, "leakage for {}", total);
        }
    }

    #[test]
    fn test_checkout_totals() {
        use crate::catalog::Product;
        use crate::ids::ProductId;

        let mut cart = Cart::new();
        let mut product = Product {
            id: ProductId::new("p-1"),
            name: "Mouse".to_string(),
            price: Money::new(10000),
            category: String::new(),
            description: String::new(),
            images: vec![],
            offer: None,
        };
        cart.add(product.clone(), 2);
        product.id = ProductId::new("p-2");
        product.price = Money::new(5000);
        cart.add(product, 1);

        let totals = CheckoutTotals::for_cart(&cart);
        assert_eq!(totals.subtotal, Money::new(25000));
        assert_eq!(totals.shipping_fee, Money::new(5000));
        assert_eq!(totals.total, Money::new(30000));
    }
}
