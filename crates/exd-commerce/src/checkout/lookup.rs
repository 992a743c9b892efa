//! RUT lookup collaborator seam.
//!
//! While the invoice flag is set, edits to the tax-id field trigger a
//! debounced lookup against an external taxpayer registry; a hit
//! auto-fills the legal name and billing address. The service is a
//! trait here; the HTTP client lives outside this crate.
//!
//! Staleness is handled with sequence tokens rather than cancellation:
//! every edit issues a fresh token, and only a completion carrying the
//! latest token may touch the form. A result that resolves for a
//! superseded tax-id is simply discarded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failures. All are non-fatal: the customer can still fill the
/// billing fields manually.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The registry has no record for this tax id.
    #[error("RUT no encontrado: {0}")]
    NotFound(String),

    /// The registry could not be reached.
    #[error("Servicio de consulta no disponible: {0}")]
    Unavailable(String),
}

/// One registered address of a taxpayer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxpayerAddress {
    /// Street line.
    pub street: String,
    /// Commune.
    pub commune: String,
}

/// Registry record for a tax id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxpayerInfo {
    /// Registered legal name.
    pub legal_name: String,
    /// Registered addresses; only the first is used.
    #[serde(default)]
    pub addresses: Vec<TaxpayerAddress>,
}

impl TaxpayerInfo {
    /// The first registered address as `"{street}, {commune}"`.
    pub fn primary_address(&self) -> Option<String> {
        self.addresses
            .first()
            .map(|a| format!("{}, {}", a.street, a.commune))
    }
}

/// External taxpayer registry.
pub trait RutLookup {
    /// Look up a raw (possibly punctuated) tax-id string.
    fn lookup(&self, rut: &str) -> Result<TaxpayerInfo, LookupError>;
}

/// Token identifying one edit of the tax-id field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LookupToken(u64);

/// Issues monotonically increasing tokens; the latest one wins.
#[derive(Debug, Default)]
pub struct LookupSequencer {
    latest: u64,
}

impl LookupSequencer {
    /// Create a sequencer with no edits recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit and return its token, superseding all earlier
    /// tokens.
    pub fn issue(&mut self) -> LookupToken {
        self.latest += 1;
        LookupToken(self.latest)
    }

    /// Whether `token` is still the latest edit.
    pub fn is_current(&self, token: LookupToken) -> bool {
        token.0 == self.latest
    }
}
