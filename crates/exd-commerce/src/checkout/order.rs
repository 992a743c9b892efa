//! Order snapshot types.
//!
//! An [`Order`] is created once, at the moment a checkout succeeds, and
//! never mutated afterwards. It is persisted under [`LAST_ORDER_KEY`]
//! for exactly one downstream read (the receipt view) and consumed by
//! [`take_last_order`].

use exd_store::{Storage, StorageExt};
use serde::{Deserialize, Serialize};

use crate::cart::{tax_backout, Cart, CheckoutTotals, TaxBreakdown};
use crate::checkout::form::{BillingInfo, CheckoutForm};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// Storage key for the last completed order.
pub const LAST_ORDER_KEY: &str = "exd:last-order";

/// Customer identity captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    /// Street address.
    pub street: String,
    /// Apartment/unit, may be empty.
    pub unit: String,
    /// Region.
    pub region: String,
    /// Commune.
    pub commune: String,
    /// Delivery notes, may be empty.
    pub notes: String,
}

/// A line of the order, denormalized for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product name at order time.
    pub name: String,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: u32,
    /// Image reference resolved at add-to-cart time.
    pub image: String,
}

impl OrderLineItem {
    /// Line total: unit price times quantity.
    pub fn total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity as i64)
    }
}

/// The immutable record of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Human-readable order number, unique per checkout.
    pub order_number: OrderId,
    /// Customer identity.
    pub customer: CustomerInfo,
    /// Shipping destination.
    pub shipping_address: ShippingAddress,
    /// Billing block, present only for invoice checkouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingInfo>,
    /// Ordered items.
    pub line_items: Vec<OrderLineItem>,
    /// Cart total before shipping.
    pub subtotal: Money,
    /// Shipping fee charged.
    pub shipping_fee: Money,
    /// Amount charged.
    pub total: Money,
    /// IVA breakdown, shown on invoices for audit only; it does not
    /// change what the customer is charged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<TaxBreakdown>,
    /// Unix timestamp of the purchase.
    pub placed_at: i64,
}

impl Order {
    /// Snapshot the current cart and form into an order.
    ///
    /// The billing block and IVA breakdown are attached only when the
    /// checkout required an invoice.
    pub fn from_checkout(form: &CheckoutForm, requires_invoice: bool, cart: &Cart) -> Self {
        let totals = CheckoutTotals::for_cart(cart);

        let line_items = cart
            .lines()
            .iter()
            .map(|line| OrderLineItem {
                name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
                image: line.product.primary_image().to_string(),
            })
            .collect();

        Self {
            order_number: generate_order_number(),
            customer: CustomerInfo {
                name: form.name.clone(),
                surname: form.surname.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
            },
            shipping_address: ShippingAddress {
                street: form.street.clone(),
                unit: form.unit.clone(),
                region: form.region.clone(),
                commune: form.commune.clone(),
                notes: form.notes.clone(),
            },
            billing: requires_invoice.then(|| form.billing.clone()),
            line_items,
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping_fee,
            total: totals.total,
            tax: requires_invoice.then(|| tax_backout(totals.total)),
            placed_at: current_timestamp(),
        }
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.line_items.len()
    }

    /// Format the order as a plain-text receipt.
    pub fn receipt(&self) -> String {
        let mut lines = vec![
            "EX DIGITAL - Tecnología y Gaming".to_string(),
            format!("Orden N° {}", self.order_number),
            String::new(),
            format!("{} {}", self.customer.name, self.customer.surname),
            format!("{}, {}", self.shipping_address.street, self.shipping_address.commune),
            String::new(),
        ];

        for item in &self.line_items {
            lines.push(format!(
                "{} x{}  {}",
                item.name,
                item.quantity,
                item.total().display()
            ));
        }

        lines.push(String::new());
        lines.push(format!("Subtotal  {}", self.subtotal.display()));
        if self.shipping_fee.is_zero() {
            lines.push("Envío     Gratis".to_string());
        } else {
            lines.push(format!("Envío     {}", self.shipping_fee.display()));
        }
        lines.push(format!("Total     {}", self.total.display()));

        if let Some(tax) = &self.tax {
            lines.push(String::new());
            lines.push(format!("Neto      {}", tax.net.display()));
            lines.push(format!("IVA 19%   {}", tax.tax.display()));
        }

        lines.join("\n")
    }
}

/// Persist an order as the last completed checkout, overwriting any
/// prior snapshot.
pub fn persist_last_order<S: Storage>(storage: &S, order: &Order) -> Result<(), CommerceError> {
    storage.set_json(LAST_ORDER_KEY, order)?;
    Ok(())
}

/// Consume the last completed order, if any.
///
/// The snapshot exists for exactly one downstream read; taking it
/// removes it from storage. A payload that no longer deserializes is
/// discarded.
pub fn take_last_order<S: Storage>(storage: &S) -> Result<Option<Order>, CommerceError> {
    match storage.take_json(LAST_ORDER_KEY) {
        Ok(order) => Ok(order),
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed order snapshot");
            storage.remove(LAST_ORDER_KEY).ok();
            Ok(None)
        }
    }
}

/// Generate a time-based order number, e.g. `EXD-1712345678901`.
///
/// An atomic counter suffix keeps numbers unique when two checkouts
/// land on the same millisecond.
fn generate_order_number() -> OrderId {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    OrderId::new(format!("EXD-{}{:03}", millis, counter % 1000))
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use exd_store::MemoryStorage;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            Product {
                id: ProductId::new("p-1"),
                name: "Mouse Gamer".to_string(),
                price: Money::new(10000),
                category: "mouses".to_string(),
                description: String::new(),
                images: vec!["/img/mouse.png".to_string()],
                offer: None,
            },
            2,
        );
        cart.add(
            Product {
                id: ProductId::new("p-2"),
                name: "Teclado TKL".to_string(),
                price: Money::new(5000),
                category: "teclados".to_string(),
                description: String::new(),
                images: vec![],
                offer: None,
            },
            1,
        );
        cart
    }

    fn sample_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ana".to_string(),
            surname: "Rojas".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+56912345678".to_string(),
            street: "Av. Libertador 123".to_string(),
            unit: String::new(),
            region: "Región de Valparaíso".to_string(),
            commune: "Viña del Mar".to_string(),
            notes: String::new(),
            billing: BillingInfo {
                legal_name: "Comercial Rojas SpA".to_string(),
                tax_id: "76.086.428-5".to_string(),
                business_activity: "Venta al por menor".to_string(),
                billing_address: "Av. Libertador 123, Viña del Mar".to_string(),
            },
        }
    }

    #[test]
    fn test_snapshot_totals() {
        let order = Order::from_checkout(&sample_form(), false, &sample_cart());

        assert_eq!(order.subtotal, Money::new(25000));
        assert_eq!(order.shipping_fee, Money::new(5000));
        assert_eq!(order.total, Money::new(30000));
        assert_eq!(order.line_count(), 2);
        assert!(order.billing.is_none());
        assert!(order.tax.is_none());
    }

    #[test]
    fn test_snapshot_carries_resolved_images() {
        let order = Order::from_checkout(&sample_form(), false, &sample_cart());
        assert_eq!(order.line_items[0].image, "/img/mouse.png");
        // Missing image resolved to the placeholder at add time.
        assert_eq!(
            order.line_items[1].image,
            crate::catalog::PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn test_invoice_checkout_attaches_billing_and_tax() {
        let order = Order::from_checkout(&sample_form(), true, &sample_cart());

        let billing = order.billing.as_ref().unwrap();
        assert_eq!(billing.legal_name, "Comercial Rojas SpA");

        let tax = order.tax.unwrap();
        assert_eq!(tax.net + tax.tax, order.total);
    }

    #[test]
    fn test_order_numbers_unique() {
        let a = Order::from_checkout(&sample_form(), false, &sample_cart());
        let b = Order::from_checkout(&sample_form(), false, &sample_cart());
        assert!(a.order_number.as_str().starts_with("EXD-"));
        assert_ne!(a.order_number, b.order_number);
    }

    #[test]
    fn test_persist_then_take_once() {
        let storage = MemoryStorage::new();
        let order = Order::from_checkout(&sample_form(), false, &sample_cart());

        persist_last_order(&storage, &order).unwrap();

        let first = take_last_order(&storage).unwrap();
        assert_eq!(first.as_ref().map(|o| o.total), Some(Money::new(30000)));

        let second = take_last_order(&storage).unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_take_discards_malformed_snapshot() {
        let storage = MemoryStorage::new();
        storage.write(LAST_ORDER_KEY, "{not an order").unwrap();

        assert!(take_last_order(&storage).unwrap().is_none());
        assert!(!storage.contains(LAST_ORDER_KEY).unwrap());
    }

    #[test]
    fn test_receipt_formatting() {
        let order = Order::from_checkout(&sample_form(), true, &sample_cart());
        let receipt = order.receipt();

        assert!(receipt.contains("EX DIGITAL"));
        assert!(receipt.contains(order.order_number.as_str()));
        assert!(receipt.contains("Mouse Gamer x2  $20.000"));
        assert!(receipt.contains("Total     $30.000"));
        assert!(receipt.contains("IVA 19%"));
    }
}
