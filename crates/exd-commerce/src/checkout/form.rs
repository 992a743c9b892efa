//! Checkout form and submit validation.

use serde::{Deserialize, Serialize};

use crate::checkout::region::is_valid_commune;
use crate::error::CommerceError;

/// Legal-entity fields required when the customer requests a formal
/// tax invoice instead of a plain receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BillingInfo {
    /// Registered company name.
    pub legal_name: String,
    /// Chilean RUT.
    pub tax_id: String,
    /// Registered business activity ("giro").
    pub business_activity: String,
    /// Billing address.
    pub billing_address: String,
}

impl BillingInfo {
    /// All four fields filled in.
    pub fn is_complete(&self) -> bool {
        !self.legal_name.is_empty()
            && !self.tax_id.is_empty()
            && !self.business_activity.is_empty()
            && !self.billing_address.is_empty()
    }
}

/// Everything the customer types during checkout.
///
/// Fields mutate freely while the flow is in `Editing`; validation
/// happens once, synchronously, at submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutForm {
    /// First name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Street address.
    pub street: String,
    /// Apartment/unit, optional.
    pub unit: String,
    /// Shipping region; must be one of [`REGIONS`](crate::checkout::REGIONS).
    pub region: String,
    /// Commune within the region.
    pub commune: String,
    /// Delivery notes, optional.
    pub notes: String,
    /// Billing block; only validated when the invoice flag is set.
    pub billing: BillingInfo,
}

impl CheckoutForm {
    /// Synchronous all-or-nothing submit gate.
    ///
    /// Collects every problem into one aggregated message; either the
    /// whole form passes or nothing is submitted.
    pub fn validate(&self, requires_invoice: bool) -> Result<(), CommerceError> {
        let mut problems: Vec<String> = Vec::new();

        let required = [
            (&self.name, "nombre"),
            (&self.surname, "apellido"),
            (&self.email, "email"),
            (&self.phone, "teléfono"),
            (&self.street, "calle"),
            (&self.region, "región"),
            (&self.commune, "comuna"),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(value, _)| value.trim().is_empty())
            .map(|(_, label)| *label)
            .collect();
        if !missing.is_empty() {
            problems.push(format!("completa los campos: {}", missing.join(", ")));
        }

        if !self.email.trim().is_empty() && !self.email.contains('@') {
            problems.push("ingresa un email válido".to_string());
        }

        if !self.phone.trim().is_empty() && self.phone.chars().count() < 8 {
            problems.push("ingresa un teléfono válido".to_string());
        }

        if !self.region.is_empty()
            && !self.commune.is_empty()
            && !is_valid_commune(&self.region, &self.commune)
        {
            problems.push("la comuna no pertenece a la región seleccionada".to_string());
        }

        if requires_invoice && !self.billing.is_complete() {
            problems.push("completa todos los datos de facturación".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::ValidationFailed(problems.join("; ")))
        }
    }
}
