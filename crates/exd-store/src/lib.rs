//! Durable key-value client storage for the EX DIGITAL storefront.
//!
//! The browser session owns a handful of persisted payloads: the cart
//! contents, the last completed order snapshot, and the checkout
//! preferences. This crate provides the storage seam they all go
//! through:
//!
//! - **`Storage`**: the key -> string persistence trait the host
//!   environment implements (localStorage in the browser, a file or
//!   table elsewhere).
//! - **`MemoryStorage`**: an in-process implementation for tests and
//!   headless use.
//! - **`StorageExt`**: typed JSON `get_json`/`set_json` on top of any
//!   `Storage`.

pub mod error;
pub mod kv;

pub use error::StorageError;
pub use kv::{MemoryStorage, Storage, StorageExt};

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust,ignore
/// let key = storage_key!("exd", "cart");
/// // Returns "exd:cart"
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
