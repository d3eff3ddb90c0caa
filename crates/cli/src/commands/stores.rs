//! Store dataset commands: list and validate.

#![allow(clippy::print_stdout)]

use std::collections::HashSet;
use std::path::Path;

use tidemark_storefront::dataset::{DatasetError, StoreDataset, StoreIndex};

/// List the store IDs in a dataset directory.
pub fn list(data_dir: &Path) -> Result<(), DatasetError> {
    let index = StoreIndex::load(data_dir)?;

    for store_id in &index.store_ids {
        let marker = if *store_id == index.default_store_id {
            " (default)"
        } else {
            ""
        };
        println!("{store_id}{marker}");
    }

    Ok(())
}

/// Load every store dataset and report integrity problems.
///
/// Hard failures (missing files, malformed JSON, unknown currencies or
/// block tags) abort with the loader's error. Soft problems - dangling
/// references the storefront would tolerate by skipping - are printed as
/// warnings so dataset authors can fix them before they ship.
pub fn validate(data_dir: &Path) -> Result<(), DatasetError> {
    let index = StoreIndex::load(data_dir)?;

    if !index.store_ids.contains(&index.default_store_id) {
        println!(
            "warning: defaultStoreId {} is not in storeIds",
            index.default_store_id
        );
    }

    for store_id in &index.store_ids {
        let dataset = StoreDataset::load(data_dir, store_id)?;
        let warnings = dataset_warnings(&dataset);

        for warning in &warnings {
            println!("warning: [{store_id}] {warning}");
        }
        println!(
            "{store_id}: ok ({} products, {} collections, {} warnings)",
            dataset.products.len(),
            dataset.collections.len(),
            warnings.len()
        );
    }

    Ok(())
}

/// Soft integrity checks over one loaded dataset.
fn dataset_warnings(dataset: &StoreDataset) -> Vec<String> {
    let mut warnings = Vec::new();

    // Duplicate product handles break lookup by handle.
    let mut handles = HashSet::new();
    for product in &dataset.products {
        if !handles.insert(product.handle.as_str()) {
            warnings.push(format!("duplicate product handle: {}", product.handle));
        }
        if product.variants.is_empty() {
            warnings.push(format!("product {} has no variants", product.handle));
        }
    }

    // Collections referencing products that don't exist render as gaps.
    for collection in &dataset.collections {
        for handle in &collection.product_handles {
            if dataset.product_by_handle(handle).is_none() {
                warnings.push(format!(
                    "collection {} references unknown product {handle}",
                    collection.handle
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flags_dangling_collection_references_and_empty_variants() {
        let dataset = StoreDataset {
            config: serde_json::from_str(&sample_config()).unwrap(),
            content: serde_json::from_str(
                r#"{
                    "home": {"seo": {"title": "x"}, "blocks": []},
                    "about": {"seo": {"title": "x"}, "blocks": []},
                    "contact": {"seo": {"title": "x"}, "blocks": []}
                }"#,
            )
            .unwrap(),
            products: serde_json::from_str(
                r#"[{
                    "id": "p1", "handle": "mug", "title": "Mug", "description": "",
                    "price": {"current": 14.0, "currency": "USD"},
                    "variants": []
                }]"#,
            )
            .unwrap(),
            collections: serde_json::from_str(
                r#"[{"id": "c1", "handle": "all", "title": "All", "productHandles": ["mug", "gone"]}]"#,
            )
            .unwrap(),
            legal: serde_json::from_str(
                r#"{
                    "privacy": {"title": "P", "updated": "2025-01-01", "sections": []},
                    "terms": {"title": "T", "updated": "2025-01-01", "sections": []}
                }"#,
            )
            .unwrap(),
        };

        let warnings = dataset_warnings(&dataset);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("no variants")));
        assert!(warnings.iter().any(|w| w.contains("unknown product gone")));
    }

    fn sample_config() -> String {
        r##"{
            "id": "t",
            "brand": {"name": "T", "logoPath": "/logo.svg"},
            "theme": {
                "colors": {"background": "#fff", "foreground": "#000", "muted": "#888",
                           "accent": "#050", "accentMuted": "#efe", "border": "#ddd",
                           "surface": "#fff"},
                "typography": {"display": "serif", "body": "sans-serif"},
                "radii": {"sm": "2px", "md": "4px", "lg": "8px", "pill": "999px"},
                "spacing": {"sectionY": "4rem", "containerX": "1rem"},
                "shadows": {"sm": "none", "md": "none", "lg": "none"}
            },
            "navigation": {"header": [], "footer": []},
            "trust": [],
            "money": {"currency": "USD", "locale": "en-US"},
            "commerce": {
                "ctas": {
                    "addToCart": {"label": "Add", "successLabel": "Added"},
                    "checkout": {"label": "Check out", "href": "/checkout"}
                },
                "cart": {"title": "Cart", "emptyTitle": "Empty", "subtotalLabel": "Subtotal",
                         "quantityLabel": "Qty", "removeLabel": "Remove",
                         "decreaseLabel": "Less", "increaseLabel": "More"},
                "checkout": {
                    "title": "Checkout",
                    "steps": {"contact": "Contact", "shipping": "Shipping", "payment": "Payment"},
                    "contact": {"title": "Contact", "emailLabel": "Email", "phoneLabel": "Phone"},
                    "shipping": {"title": "Shipping", "firstNameLabel": "First",
                                 "lastNameLabel": "Last", "addressLabel": "Address",
                                 "cityLabel": "City", "postalLabel": "Postal",
                                 "countryLabel": "Country"},
                    "payment": {"title": "Payment"},
                    "summary": {"title": "Summary", "subtotalLabel": "Subtotal",
                                "shippingLabel": "Shipping", "taxLabel": "Tax",
                                "totalLabel": "Total"},
                    "actions": {"nextLabel": "Next", "backLabel": "Back"},
                    "placeOrderLabel": "Place order",
                    "confirmation": {"title": "Thanks"}
                }
            }
        }"##
        .to_owned()
    }
}
