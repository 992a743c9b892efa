//! Cart and checkout domain logic for the EX DIGITAL storefront.
//!
//! This crate holds the storefront's business core, independent of any
//! rendering or network layer:
//!
//! - **Catalog**: products, time-windowed offers, tolerant API DTOs
//! - **Cart**: line items, quantity rules, persistent cart store
//! - **Pricing**: totals, shipping threshold, IVA backout
//! - **Checkout**: form validation, payment submission state machine,
//!   order snapshots
//! - **RUT**: Chilean tax-id checksum validation
//!
//! # Example
//!
//! ```rust,ignore
//! use exd_commerce::prelude::*;
//! use exd_store::MemoryStorage;
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! cart.init()?;
//! cart.add(product, 2)?;
//!
//! let mut flow = CheckoutFlow::new();
//! flow.form.name = "Ana".into();
//! // ... fill the rest of the form ...
//! match flow.submit(&mut cart, &AlwaysSucceeds)? {
//!     SubmitOutcome::Completed(order) => println!("{}", order.receipt()),
//!     SubmitOutcome::Declined => println!("retry shortly"),
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod rut;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::rut::{check_digit, format_rut, is_valid_rut};

    // Catalog
    pub use crate::catalog::{Offer, Product, ProductDto, PLACEHOLDER_IMAGE};

    // Cart
    pub use crate::cart::{
        shipping_fee, tax_backout, Cart, CartLine, CartStore, CheckoutTotals, TaxBreakdown,
        MAX_QUANTITY, MIN_QUANTITY,
    };

    // Checkout
    pub use crate::checkout::{
        communes_for, AlwaysFails, AlwaysSucceeds, BillingInfo, CheckoutFlow, CheckoutForm,
        CheckoutState, CustomerInfo, LookupError, LookupSequencer, LookupToken, Order,
        OrderLineItem, PaymentOutcome, PaymentProcessor, RandomWithRate, RutLookup,
        ShippingAddress, SubmitOutcome, TaxpayerAddress, TaxpayerInfo, REGIONS,
    };
}
