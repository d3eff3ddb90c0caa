//! Cart line items and resolution against a catalog snapshot.
//!
//! A stored cart line references its product and variant by ID only. Before
//! rendering or totalling, lines are joined against the live catalog with
//! [`resolve_cart_lines`]; lines whose references no longer resolve are
//! dropped from the view but stay in the persisted cart, so they come back
//! if the catalog regains a match.
//!
//! Pricing note: [`cart_subtotal`] always uses the catalog's *current*
//! price. There is no price snapshot taken at add-to-cart time, so a catalog
//! price change moves existing cart totals. The catalog is the single source
//! of truth for pricing.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, VariantId};
use crate::types::product::{Product, Variant};

/// A stored cart line.
///
/// Identity is the `(product_id, variant_id)` pair; a cart holds at most one
/// line per pair. Quantity is always positive - operations that would drive
/// it to zero remove the line instead, and persisted data violating this
/// fails deserialization and degrades to an empty cart upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: u32,
}

impl CartLineItem {
    /// Whether this line has the given identity pair.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        &self.product_id == product_id && &self.variant_id == variant_id
    }
}

/// A cart line joined against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCartLine<'a> {
    pub line: &'a CartLineItem,
    pub product: &'a Product,
    pub variant: &'a Variant,
}

impl ResolvedCartLine<'_> {
    /// Line total at the current catalog price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.current * Decimal::from(self.line.quantity)
    }
}

/// Join stored cart lines against a catalog snapshot.
///
/// Builds a product lookup once, then resolves each line in input order.
/// Lines referencing a missing product or variant are excluded without
/// error - catalog drift is expected and tolerated, and the persisted cart
/// is not touched here.
#[must_use]
pub fn resolve_cart_lines<'a>(
    lines: &'a [CartLineItem],
    products: &'a [Product],
) -> Vec<ResolvedCartLine<'a>> {
    let by_id: HashMap<&ProductId, &Product> =
        products.iter().map(|product| (&product.id, product)).collect();

    lines
        .iter()
        .filter_map(|line| {
            let product = by_id.get(&line.product_id).copied()?;
            let variant = product.variant(&line.variant_id)?;
            Some(ResolvedCartLine {
                line,
                product,
                variant,
            })
        })
        .collect()
}

/// Sum of `current price * quantity` over resolved lines.
#[must_use]
pub fn cart_subtotal(lines: &[ResolvedCartLine<'_>]) -> Decimal {
    lines.iter().map(ResolvedCartLine::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::money::CurrencyCode;
    use crate::types::product::{Price, Variant};

    fn product(id: &str, price: Decimal, variant_ids: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            handle: id.to_owned(),
            title: id.to_owned(),
            description: String::new(),
            images: Vec::new(),
            price: Price {
                current: price,
                compare_at: None,
                currency: CurrencyCode::USD,
            },
            variants: variant_ids
                .iter()
                .map(|variant_id| Variant {
                    id: VariantId::new(*variant_id),
                    title: (*variant_id).to_owned(),
                    options: Vec::new(),
                    sku: None,
                    in_stock: None,
                    inventory_qty: None,
                })
                .collect(),
            tags: None,
            metadata: None,
        }
    }

    fn line(product_id: &str, variant_id: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id: ProductId::new(product_id),
            variant_id: VariantId::new(variant_id),
            quantity,
        }
    }

    #[test]
    fn drops_lines_with_missing_product() {
        let products = vec![product("p1", Decimal::new(20, 0), &["v1"])];
        let lines = vec![line("missing", "x", 1)];

        let resolved = resolve_cart_lines(&lines, &products);
        assert!(resolved.is_empty());
    }

    #[test]
    fn drops_lines_with_missing_variant() {
        let products = vec![product("p1", Decimal::new(20, 0), &["v1"])];
        let lines = vec![line("p1", "gone", 1)];

        let resolved = resolve_cart_lines(&lines, &products);
        assert!(resolved.is_empty());
    }

    #[test]
    fn output_order_matches_input_order() {
        let products = vec![
            product("p1", Decimal::new(10, 0), &["v1"]),
            product("p2", Decimal::new(15, 0), &["v2"]),
        ];
        let lines = vec![line("p2", "v2", 1), line("p1", "v1", 2)];

        let resolved = resolve_cart_lines(&lines, &products);
        let ids: Vec<&str> = resolved
            .iter()
            .map(|r| r.product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn subtotal_multiplies_current_price_by_quantity() {
        let products = vec![product("p1", Decimal::new(20, 0), &["v1"])];
        let lines = vec![line("p1", "v1", 3)];

        let resolved = resolve_cart_lines(&lines, &products);
        assert_eq!(cart_subtotal(&resolved), Decimal::new(60, 0));
    }

    #[test]
    fn subtotal_tracks_live_catalog_price() {
        // The subtotal reflects the catalog as passed in, not any price the
        // line was added at.
        let lines = vec![line("p1", "v1", 2)];

        let before = vec![product("p1", Decimal::new(20, 0), &["v1"])];
        let after = vec![product("p1", Decimal::new(25, 0), &["v1"])];

        assert_eq!(
            cart_subtotal(&resolve_cart_lines(&lines, &before)),
            Decimal::new(40, 0)
        );
        assert_eq!(
            cart_subtotal(&resolve_cart_lines(&lines, &after)),
            Decimal::new(50, 0)
        );
    }

    #[test]
    fn subtotal_of_empty_resolution_is_zero() {
        assert_eq!(cart_subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn partial_resolution_keeps_surviving_lines() {
        let products = vec![product("p1", Decimal::new(12, 0), &["v1"])];
        let lines = vec![line("p1", "v1", 1), line("p2", "v9", 4)];

        let resolved = resolve_cart_lines(&lines, &products);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.first().unwrap().line.quantity, 1);
    }
}
