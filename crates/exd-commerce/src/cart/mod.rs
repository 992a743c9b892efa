//! Shopping cart: line items, quantity rules, pricing, persistence.

#[allow(clippy::module_inception)]
pub mod cart;
pub mod pricing;
pub mod store;

pub use cart::{Cart, CartLine, MAX_QUANTITY, MIN_QUANTITY};
pub use pricing::{shipping_fee, tax_backout, CheckoutTotals, TaxBreakdown};
pub use store::{CartStore, CART_KEY, REQUIRES_INVOICE_KEY};
