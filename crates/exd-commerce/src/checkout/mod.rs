//! Checkout: form validation, payment submission state machine, order
//! snapshots.

pub mod flow;
pub mod form;
pub mod lookup;
pub mod order;
pub mod payment;
pub mod region;

pub use flow::{CheckoutFlow, CheckoutState, SubmitOutcome};
pub use form::{BillingInfo, CheckoutForm};
pub use lookup::{LookupError, LookupSequencer, LookupToken, RutLookup, TaxpayerAddress, TaxpayerInfo};
pub use order::{take_last_order, CustomerInfo, Order, OrderLineItem, ShippingAddress, LAST_ORDER_KEY};
pub use payment::{AlwaysFails, AlwaysSucceeds, PaymentOutcome, PaymentProcessor, RandomWithRate};
pub use region::{communes_for, is_valid_commune, REGIONS};
