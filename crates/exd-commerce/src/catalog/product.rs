//! Product types and tolerant API deserialization.

use crate::catalog::Offer;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Image reference shown when a product carries no usable image.
pub const PLACEHOLDER_IMAGE: &str = "/img/carrito-de-compras.png";

/// A catalog product as the storefront displays it.
///
/// Read-only to the cart/checkout core; the cart snapshots it at
/// add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price (already discounted while an offer is
    /// effective).
    pub price: Money,
    /// Category reference.
    pub category: String,
    /// Description.
    pub description: String,
    /// Up to three image references.
    #[serde(default)]
    pub images: Vec<String>,
    /// Optional time-windowed discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,
}

impl Product {
    /// The image reference to carry into cart lines and order
    /// snapshots.
    ///
    /// Falls back to the known placeholder when no image was resolved.
    pub fn primary_image(&self) -> &str {
        self.images
            .iter()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// A product as the remote catalog API serves it.
///
/// The API is inconsistent about field names: the unit price arrives as
/// `value` or `price` depending on the endpoint, and optional arrays may
/// be missing entirely. This DTO accepts both shapes; [`ProductDto::into_product`]
/// resolves them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product identifier.
    #[serde(alias = "id")]
    pub product_id: i64,
    /// Display name.
    #[serde(alias = "name")]
    pub product_name: String,
    /// Unit price under the newer field name.
    #[serde(default)]
    pub value: Option<i64>,
    /// Unit price under the legacy field name.
    #[serde(default)]
    pub price: Option<i64>,
    /// Category reference.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Image URLs; may be absent.
    #[serde(default, alias = "images")]
    pub image_urls: Vec<String>,
    /// Attached discount id, if any.
    #[serde(default)]
    pub discount_id: Option<i64>,
    /// Attached discount percentage, if any.
    #[serde(default)]
    pub discount_percentage: Option<u8>,
}

impl ProductDto {
    /// The unit price, whichever field the API used. Missing both -> 0.
    pub fn unit_price(&self) -> Money {
        Money::new(self.value.or(self.price).unwrap_or(0))
    }

    /// Convert into a domain [`Product`].
    ///
    /// Discount id/percentage are carried by the DTO but a full
    /// [`Offer`] needs the date window from the discount endpoint, so
    /// the product starts without one.
    pub fn into_product(self) -> Product {
        let price = self.unit_price();
        Product {
            id: ProductId::new(self.product_id.to_string()),
            name: self.product_name,
            price,
            category: self
                .category_id
                .map(|c| c.to_string())
                .unwrap_or_default(),
            description: self.description,
            images: self.image_urls,
            offer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(images: Vec<String>) -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Teclado Mecánico RGB".to_string(),
            price: Money::new(49990),
            category: "teclados".to_string(),
            description: "Switches rojos, formato TKL".to_string(),
            images,
            offer: None,
        }
    }

    #[test]
    fn test_primary_image() {
        let p = product(vec!["/img/teclado.png".to_string()]);
        assert_eq!(p.primary_image(), "/img/teclado.png");
    }

    #[test]
    fn test_primary_image_falls_back_to_placeholder() {
        assert_eq!(product(vec![]).primary_image(), PLACEHOLDER_IMAGE);
        assert_eq!(
            product(vec!["".to_string()]).primary_image(),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn test_dto_value_field() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"productId": 7, "productName": "Mouse Inalámbrico", "value": 19990}"#,
        )
        .unwrap();
        assert_eq!(dto.unit_price(), Money::new(19990));
    }

    #[test]
    fn test_dto_price_fallback() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"productId": 7, "productName": "Mouse Inalámbrico", "price": 18990}"#,
        )
        .unwrap();
        assert_eq!(dto.unit_price(), Money::new(18990));
    }

    #[test]
    fn test_dto_value_wins_over_price() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"productId": 7, "productName": "Mouse", "value": 19990, "price": 1}"#,
        )
        .unwrap();
        assert_eq!(dto.unit_price(), Money::new(19990));
    }

    #[test]
    fn test_dto_missing_images_and_price() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"productId": 9, "productName": "Audífonos"}"#).unwrap();
        assert_eq!(dto.unit_price(), Money::zero());

        let p = dto.into_product();
        assert!(p.images.is_empty());
        assert_eq!(p.primary_image(), PLACEHOLDER_IMAGE);
        assert_eq!(p.id.as_str(), "9");
    }
}
