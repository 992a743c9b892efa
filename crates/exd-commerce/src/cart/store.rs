//! Persistent cart store.
//!
//! Wraps the pure [`Cart`] with durable client storage and an observer
//! list, replacing the ambient context the storefront originally leaned
//! on. Lifecycle: construct, `init()` once to load persisted state,
//! then mutate; every mutation writes through to storage after the
//! in-memory update and notifies subscribers.

use exd_store::{Storage, StorageExt};

use crate::cart::Cart;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;

/// Storage key for the cart contents.
pub const CART_KEY: &str = "exd:cart";

/// Storage key for the "requires invoice" checkout preference.
pub const REQUIRES_INVOICE_KEY: &str = "exd:requires-invoice";

/// Callback invoked after every cart mutation.
pub type CartListener = Box<dyn Fn(&Cart)>;

/// The session's cart plus its persistence and observers.
pub struct CartStore<S: Storage> {
    storage: S,
    cart: Cart,
    requires_invoice: bool,
    loaded: bool,
    listeners: Vec<CartListener>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over a storage backend. The cart stays empty and
    /// unwritable until [`CartStore::init`] runs.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            cart: Cart::new(),
            requires_invoice: false,
            loaded: false,
            listeners: Vec::new(),
        }
    }

    /// Load persisted state. Must complete before any mutation so a
    /// transient empty cart never clobbers previously persisted data.
    ///
    /// A payload that no longer deserializes is treated as absent: the
    /// session starts with an empty cart rather than failing the whole
    /// storefront.
    pub fn init(&mut self) -> Result<(), CommerceError> {
        self.cart = match self.storage.get_json(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed persisted cart");
                Cart::new()
            }
        };
        self.requires_invoice = match self.storage.get_json(REQUIRES_INVOICE_KEY) {
            Ok(Some(flag)) => flag,
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed invoice preference");
                false
            }
        };
        self.loaded = true;
        tracing::debug!(lines = self.cart.line_count(), "cart store initialized");
        Ok(())
    }

    /// Whether the initial load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Register an observer notified after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add a product, merging into an existing line for the same
    /// product id.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CommerceError> {
        self.mutate(|cart| {
            tracing::debug!(product = %product.id, quantity, "cart add");
            cart.add(product, quantity);
        })
    }

    /// Remove the line at `index`.
    pub fn remove(&mut self, index: usize) -> Result<(), CommerceError> {
        self.mutate(|cart| {
            tracing::debug!(index, "cart remove");
            cart.remove(index);
        })
    }

    /// Overwrite a line's quantity; out-of-range values are ignored.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CommerceError> {
        self.mutate(|cart| {
            tracing::debug!(index, quantity, "cart set quantity");
            cart.set_quantity(index, quantity);
        })
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.mutate(|cart| {
            tracing::debug!("cart cleared");
            cart.clear();
        })
    }

    /// Set the "requires invoice" checkout preference.
    pub fn set_requires_invoice(&mut self, value: bool) -> Result<(), CommerceError> {
        self.ensure_loaded()?;
        self.requires_invoice = value;
        self.storage.set_json(REQUIRES_INVOICE_KEY, &value)?;
        Ok(())
    }

    /// Whether checkout must collect the billing block.
    pub fn requires_invoice(&self) -> bool {
        self.requires_invoice
    }

    /// The cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart total. Empty cart -> 0.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    /// The underlying storage backend, shared with the checkout flow
    /// for the order snapshot.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn ensure_loaded(&self) -> Result<(), CommerceError> {
        if self.loaded {
            Ok(())
        } else {
            Err(CommerceError::StoreNotInitialized)
        }
    }

    /// Apply a mutation, then persist and notify. Persistence is
    /// sequenced after the in-memory update it reflects.
    fn mutate(&mut self, f: impl FnOnce(&mut Cart)) -> Result<(), CommerceError> {
        self.ensure_loaded()?;
        f(&mut self.cart);
        self.persist()?;
        for listener in &self.listeners {
            listener(&self.cart);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), CommerceError> {
        self.storage.set_json(CART_KEY, &self.cart)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use exd_store::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {}", id),
            price: Money::new(price),
            category: "teclados".to_string(),
            description: String::new(),
            images: vec![],
            offer: None,
        }
    }

    #[test]
    fn test_mutation_before_init_is_rejected() {
        let mut store = CartStore::new(MemoryStorage::new());
        let err = store.add(product("p-1", 1000), 1).unwrap_err();
        assert!(matches!(err, CommerceError::StoreNotInitialized));
    }

    #[test]
    fn test_persists_across_reload() {
        let storage = MemoryStorage::new();

        let mut store = CartStore::new(&storage);
        store.init().unwrap();
        store.add(product("p-1", 19990), 2).unwrap();

        // A fresh store over the same backend sees the same cart.
        let mut reloaded = CartStore::new(&storage);
        reloaded.init().unwrap();
        assert_eq!(reloaded.line_count(), 1);
        assert_eq!(reloaded.total(), Money::new(39980));
    }

    #[test]
    fn test_init_survives_malformed_payload() {
        let storage = MemoryStorage::new();
        storage.write(CART_KEY, "{definitely not a cart").unwrap();

        let mut store = CartStore::new(&storage);
        store.init().unwrap();
        assert_eq!(store.line_count(), 0);
    }

    #[test]
    fn test_requires_invoice_roundtrip() {
        let storage = MemoryStorage::new();

        let mut store = CartStore::new(&storage);
        store.init().unwrap();
        assert!(!store.requires_invoice());
        store.set_requires_invoice(true).unwrap();

        let mut reloaded = CartStore::new(&storage);
        reloaded.init().unwrap();
        assert!(reloaded.requires_invoice());
    }

    #[test]
    fn test_listeners_notified_on_mutation() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.init().unwrap();

        let count = Rc::new(Cell::new(0usize));
        let seen = Rc::clone(&count);
        store.subscribe(move |cart| {
            seen.set(seen.get() + 1);
            assert!(cart.line_count() <= 1);
        });

        store.add(product("p-1", 1000), 1).unwrap();
        store.set_quantity(0, 3).unwrap();
        store.clear().unwrap();

        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let storage = MemoryStorage::new();

        let mut store = CartStore::new(&storage);
        store.init().unwrap();
        store.add(product("p-1", 1000), 1).unwrap();
        store.clear().unwrap();

        let mut reloaded = CartStore::new(&storage);
        reloaded.init().unwrap();
        assert!(reloaded.cart().is_empty());
    }
}
