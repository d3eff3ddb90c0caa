//! Product catalog types.
//!
//! These mirror the per-store dataset format: camelCase JSON with optional
//! fields omitted. Catalog data is read-only for the whole application -
//! nothing in the cart or checkout path ever mutates a product.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, VariantId};
use crate::types::money::CurrencyCode;

/// A product price in the currency's major unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Current selling price.
    pub current: Decimal,
    /// Original price when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at: Option<Decimal>,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Whether the product is currently discounted.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.compare_at.is_some_and(|compare_at| compare_at > self.current)
    }
}

/// A single named option on a variant, e.g. `{name: "Size", value: "M"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: String,
    pub value: String,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique within the owning product.
    pub id: VariantId,
    pub title: String,
    /// Ordered option set; the full set uniquely identifies the variant
    /// within its product.
    #[serde(default)]
    pub options: Vec<VariantOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_qty: Option<u32>,
}

impl Variant {
    /// Whether the variant can be added to a cart.
    ///
    /// Datasets may omit stock data entirely; absence means sellable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }
}

/// Optional SEO metadata on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL slug, unique within a store.
    pub handle: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub price: Price,
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProductMetadata>,
}

impl Product {
    /// Look up a variant by ID.
    #[must_use]
    pub fn variant(&self, variant_id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|variant| &variant.id == variant_id)
    }

    /// Resolve a selected option set to a variant.
    ///
    /// Requires an exact match across all option names: the variant's full
    /// option set must equal the selection, name for name. A partial
    /// selection never resolves.
    #[must_use]
    pub fn variant_for_options(&self, selected: &HashMap<String, String>) -> Option<&Variant> {
        self.variants.iter().find(|variant| {
            variant.options.len() == selected.len()
                && variant
                    .options
                    .iter()
                    .all(|option| selected.get(&option.name) == Some(&option.value))
        })
    }

    /// First image, used as the card/thumbnail image.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        serde_json::from_str(
            r#"{
                "id": "prod_tee",
                "handle": "harbor-tee",
                "title": "Harbor Tee",
                "description": "Heavyweight cotton tee.",
                "images": ["/images/tee-front.jpg", "/images/tee-back.jpg"],
                "price": {"current": 28.0, "compareAt": 34.0, "currency": "USD"},
                "variants": [
                    {
                        "id": "var_tee_s",
                        "title": "Small",
                        "options": [{"name": "Size", "value": "S"}],
                        "sku": "TEE-S",
                        "inStock": true
                    },
                    {
                        "id": "var_tee_m",
                        "title": "Medium",
                        "options": [{"name": "Size", "value": "M"}],
                        "inventoryQty": 4
                    }
                ],
                "tags": ["apparel"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_camel_case_dataset_fields() {
        let product = sample_product();
        assert_eq!(product.handle, "harbor-tee");
        assert_eq!(product.price.compare_at, Some(Decimal::new(34, 0)));
        assert_eq!(product.variants.len(), 2);
        assert_eq!(
            product.variants.iter().map(|v| v.inventory_qty).collect::<Vec<_>>(),
            vec![None, Some(4)]
        );
    }

    #[test]
    fn variant_lookup_by_id() {
        let product = sample_product();
        let variant = product.variant(&VariantId::new("var_tee_m")).unwrap();
        assert_eq!(variant.title, "Medium");
        assert!(product.variant(&VariantId::new("var_tee_xl")).is_none());
    }

    #[test]
    fn variant_resolution_requires_full_option_match() {
        let product = sample_product();

        let selected = HashMap::from([("Size".to_owned(), "M".to_owned())]);
        let variant = product.variant_for_options(&selected).unwrap();
        assert_eq!(variant.id, VariantId::new("var_tee_m"));

        // Extra names in the selection never resolve.
        let over_selected = HashMap::from([
            ("Size".to_owned(), "M".to_owned()),
            ("Color".to_owned(), "Navy".to_owned()),
        ]);
        assert!(product.variant_for_options(&over_selected).is_none());

        // Empty selection never resolves against non-empty option sets.
        assert!(product.variant_for_options(&HashMap::new()).is_none());
    }

    #[test]
    fn discount_detection() {
        let product = sample_product();
        assert!(product.price.is_discounted());

        let full_price = Price {
            current: Decimal::new(28, 0),
            compare_at: None,
            currency: CurrencyCode::USD,
        };
        assert!(!full_price.is_discounted());
    }

    #[test]
    fn availability_defaults_to_sellable() {
        let product = sample_product();
        let medium = product.variant(&VariantId::new("var_tee_m")).unwrap();
        assert!(medium.is_available());
    }
}
