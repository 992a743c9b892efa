//! Product catalog types.
//!
//! - [`Product`]: a catalog entry as the storefront displays it
//! - [`Offer`]: a time-windowed discount annotation on a product
//! - [`ProductDto`]: tolerant deserialization of the remote catalog API

pub mod offer;
pub mod product;

pub use offer::{is_offer_effective, Offer};
pub use product::{Product, ProductDto, PLACEHOLDER_IMAGE};
