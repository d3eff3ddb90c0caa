//! Per-store JSON dataset loading.
//!
//! Each tenant is described by a directory of JSON files under the data
//! root:
//!
//! ```text
//! data/stores/
//!   index.json                 - storeIds + defaultStoreId
//!   <store-id>/
//!     store.json               - brand, theme, navigation, money, copy
//!     content.json             - home/about/contact content blocks
//!     products.json            - catalog
//!     collections.json         - curated product groups
//!     legal.json               - privacy + terms documents
//! ```
//!
//! Datasets are loaded once at startup and held in memory; a malformed
//! dataset is a deploy defect and fails startup with a typed error, unlike
//! cart storage which degrades silently.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use tidemark_core::{Collection, MoneyFormat, Product, StoreId};

/// Dataset loading errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store {0} is not listed in the dataset index")]
    UnknownStore(StoreId),
}

// =============================================================================
// Store Index
// =============================================================================

/// The dataset root index: which tenants exist and which one is the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreIndex {
    pub default_store_id: StoreId,
    pub store_ids: Vec<StoreId>,
}

impl StoreIndex {
    /// Load `index.json` from the dataset root.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] if the index is missing or malformed.
    pub fn load(data_dir: &Path) -> Result<Self, DatasetError> {
        read_json(&data_dir.join("index.json"))
    }

    /// Resolve the active store ID.
    ///
    /// A requested override is honored only when the index lists it;
    /// anything else falls back to the default store.
    #[must_use]
    pub fn resolve(&self, requested: Option<&StoreId>) -> StoreId {
        match requested {
            Some(id) if self.store_ids.contains(id) => id.clone(),
            Some(id) => {
                tracing::warn!(
                    "STORE_ID {id} is not in the dataset index, serving default {}",
                    self.default_store_id
                );
                self.default_store_id.clone()
            }
            None => self.default_store_id.clone(),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Brand identity for a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub logo_path: String,
    #[serde(default)]
    pub logo_alt: Option<String>,
}

/// Theme design tokens, wired to CSS variables in the base template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub radii: ThemeRadii,
    pub spacing: ThemeSpacing,
    pub shadows: ThemeShadows,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub accent: String,
    pub accent_muted: String,
    pub border: String,
    pub surface: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTypography {
    pub display: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRadii {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub pill: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpacing {
    pub section_y: String,
    pub container_x: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeShadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

/// A header or footer navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

/// A social media link in the footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Visual treatment for the header call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    #[default]
    Solid,
    Ghost,
}

impl CtaVariant {
    /// CSS modifier class suffix for buttons.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Ghost => "ghost",
        }
    }
}

/// The header call-to-action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderCta {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub variant: CtaVariant,
}

/// Store navigation: header links, footer links, socials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub header: Vec<NavItem>,
    pub footer: Vec<NavItem>,
    #[serde(default)]
    pub social: Option<Vec<SocialLink>>,
    #[serde(default)]
    pub header_cta: Option<HeaderCta>,
}

/// A trust/benefit bullet (free shipping, returns, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A generic call-to-action link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// Add-to-cart button copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartCta {
    pub label: String,
    pub success_label: String,
}

/// Store-level commerce CTAs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommerceCtas {
    pub add_to_cart: AddToCartCta,
    pub checkout: CallToAction,
    #[serde(default)]
    pub continue_shopping: Option<CallToAction>,
}

/// Cart page copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCopy {
    pub title: String,
    pub empty_title: String,
    #[serde(default)]
    pub empty_description: Option<String>,
    pub subtotal_label: String,
    pub quantity_label: String,
    pub remove_label: String,
    pub decrease_label: String,
    pub increase_label: String,
}

/// Checkout step indicator labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutStepLabels {
    pub contact: String,
    pub shipping: String,
    pub payment: String,
}

/// Contact step copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCopy {
    pub title: String,
    pub email_label: String,
    pub phone_label: String,
}

/// Shipping step copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCopy {
    pub title: String,
    pub first_name_label: String,
    pub last_name_label: String,
    pub address_label: String,
    pub city_label: String,
    pub postal_label: String,
    pub country_label: String,
}

/// Payment step copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCopy {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Order summary copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCopy {
    pub title: String,
    pub subtotal_label: String,
    pub shipping_label: String,
    pub tax_label: String,
    pub total_label: String,
}

/// Wizard navigation labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutActions {
    pub next_label: String,
    pub back_label: String,
}

/// Confirmation page copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationCopy {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

/// Checkout wizard copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCopy {
    pub title: String,
    pub steps: CheckoutStepLabels,
    pub contact: ContactCopy,
    pub shipping: ShippingCopy,
    pub payment: PaymentCopy,
    pub summary: SummaryCopy,
    pub actions: CheckoutActions,
    pub place_order_label: String,
    pub confirmation: ConfirmationCopy,
}

/// All store-configurable commerce copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceCopy {
    pub ctas: CommerceCtas,
    pub cart: CartCopy,
    pub checkout: CheckoutCopy,
}

/// Top-level store configuration (`store.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub id: StoreId,
    pub brand: Brand,
    pub theme: ThemeTokens,
    pub navigation: Navigation,
    #[serde(default)]
    pub trust: Vec<TrustItem>,
    pub money: MoneyFormat,
    pub commerce: CommerceCopy,
}

// =============================================================================
// Content Blocks
// =============================================================================

/// Feature grid entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
}

/// Image strip entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A customer quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Where a trust-bar block pulls its items from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustSource {
    /// Use the store config's `trust` items.
    Store,
    /// Use the items inlined on the block.
    Content,
}

/// A contact method row (email, phone, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
}

/// A content page block.
///
/// This is a closed set dispatched by the `type` tag; rendering matches
/// exhaustively, so adding a variant here fails compilation until every
/// renderer handles it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    #[serde(rename_all = "camelCase")]
    Hero {
        id: String,
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        cta: Option<CallToAction>,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        image_alt: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    FeaturedCollections {
        id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        subtitle: Option<String>,
        #[serde(default)]
        cta: Option<CallToAction>,
        collection_handles: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    FeatureGrid {
        id: String,
        #[serde(default)]
        title: Option<String>,
        items: Vec<FeatureItem>,
    },
    #[serde(rename_all = "camelCase")]
    ImageStrip {
        id: String,
        #[serde(default)]
        title: Option<String>,
        images: Vec<StripImage>,
    },
    #[serde(rename_all = "camelCase")]
    Testimonials {
        id: String,
        #[serde(default)]
        title: Option<String>,
        items: Vec<Testimonial>,
    },
    #[serde(rename_all = "camelCase")]
    TrustBar {
        id: String,
        #[serde(default)]
        title: Option<String>,
        source: TrustSource,
        #[serde(default)]
        items: Option<Vec<TrustItem>>,
    },
    #[serde(rename_all = "camelCase")]
    PromoBanner {
        id: String,
        text: String,
        #[serde(default)]
        cta: Option<CallToAction>,
    },
    #[serde(rename_all = "camelCase")]
    CtaSection {
        id: String,
        title: String,
        #[serde(default)]
        description: Option<String>,
        cta: CallToAction,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        image_alt: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    RichText {
        id: String,
        #[serde(default)]
        title: Option<String>,
        paragraphs: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        id: String,
        #[serde(default)]
        title: Option<String>,
        methods: Vec<ContactMethod>,
    },
}

/// Page SEO metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A content page: SEO plus an ordered block list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub seo: Seo,
    pub blocks: Vec<ContentBlock>,
}

/// All content pages for a store (`content.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreContent {
    pub home: ContentPage,
    pub about: ContentPage,
    pub contact: ContentPage,
}

// =============================================================================
// Legal
// =============================================================================

/// A titled section of a legal document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalSection {
    pub title: String,
    pub body: Vec<String>,
}

/// A legal document (privacy policy, terms of service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalDoc {
    pub title: String,
    pub updated: NaiveDate,
    pub sections: Vec<LegalSection>,
}

/// Legal documents for a store (`legal.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalContent {
    pub privacy: LegalDoc,
    pub terms: LegalDoc,
}

// =============================================================================
// Dataset
// =============================================================================

/// Everything known about one store, loaded from its dataset directory.
#[derive(Debug, Clone)]
pub struct StoreDataset {
    pub config: StoreConfig,
    pub content: StoreContent,
    pub products: Vec<Product>,
    pub collections: Vec<Collection>,
    pub legal: LegalContent,
}

impl StoreDataset {
    /// Load a store's dataset from `<data_dir>/<store_id>/`.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] for any missing or malformed file. There
    /// is no partial load: a broken catalog is a startup failure, not a
    /// degraded page.
    pub fn load(data_dir: &Path, store_id: &StoreId) -> Result<Self, DatasetError> {
        let store_dir = data_dir.join(store_id.as_str());

        let dataset = Self {
            config: read_json(&store_dir.join("store.json"))?,
            content: read_json(&store_dir.join("content.json"))?,
            products: read_json(&store_dir.join("products.json"))?,
            collections: read_json(&store_dir.join("collections.json"))?,
            legal: read_json(&store_dir.join("legal.json"))?,
        };

        tracing::info!(
            store_id = %store_id,
            products = dataset.products.len(),
            collections = dataset.collections.len(),
            "Loaded store dataset"
        );

        Ok(dataset)
    }

    /// Look up a product by its URL handle.
    #[must_use]
    pub fn product_by_handle(&self, handle: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.handle == handle)
    }

    /// Look up a collection by its URL handle.
    #[must_use]
    pub fn collection_by_handle(&self, handle: &str) -> Option<&Collection> {
        self.collections.iter().find(|collection| collection.handle == handle)
    }

    /// Products of a collection, in the collection's order.
    ///
    /// Handles with no matching product are skipped.
    #[must_use]
    pub fn products_in_collection<'a>(&'a self, collection: &'a Collection) -> Vec<&'a Product> {
        collection
            .product_handles
            .iter()
            .filter_map(|handle| self.product_by_handle(handle))
            .collect()
    }
}

/// Read and deserialize one JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn index_resolves_override_only_when_listed() {
        let index = StoreIndex {
            default_store_id: StoreId::new("main"),
            store_ids: vec![StoreId::new("main"), StoreId::new("outlet")],
        };

        assert_eq!(index.resolve(None), StoreId::new("main"));
        assert_eq!(
            index.resolve(Some(&StoreId::new("outlet"))),
            StoreId::new("outlet")
        );
        assert_eq!(
            index.resolve(Some(&StoreId::new("not-a-store"))),
            StoreId::new("main")
        );
    }

    #[test]
    fn every_block_discriminant_deserializes() {
        let raw = r#"[
            {"id": "b1", "type": "hero", "title": "Welcome"},
            {"id": "b2", "type": "featured-collections", "collectionHandles": ["new"]},
            {"id": "b3", "type": "feature-grid", "items": [{"title": "t", "description": "d"}]},
            {"id": "b4", "type": "image-strip", "images": [{"src": "/a.jpg"}]},
            {"id": "b5", "type": "testimonials", "items": [{"quote": "q", "name": "n"}]},
            {"id": "b6", "type": "trust-bar", "source": "store"},
            {"id": "b7", "type": "promo-banner", "text": "Free shipping"},
            {"id": "b8", "type": "cta-section", "title": "Go", "cta": {"label": "Shop", "href": "/products"}},
            {"id": "b9", "type": "rich-text", "paragraphs": ["one", "two"]},
            {"id": "b10", "type": "contact", "methods": [{"label": "Email", "value": "hi@x.com"}]}
        ]"#;

        let blocks: Vec<ContentBlock> = serde_json::from_str(raw).unwrap();
        assert_eq!(blocks.len(), 10);
        assert!(matches!(
            blocks.first().unwrap(),
            ContentBlock::Hero { title, .. } if title == "Welcome"
        ));
        assert!(matches!(
            blocks.last().unwrap(),
            ContentBlock::Contact { methods, .. } if methods.len() == 1
        ));
    }

    #[test]
    fn unknown_block_type_fails_parse() {
        let raw = r#"{"id": "b1", "type": "carousel"}"#;
        assert!(serde_json::from_str::<ContentBlock>(raw).is_err());
    }

    #[test]
    fn loads_dataset_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("driftline");
        std::fs::create_dir_all(&store_dir).unwrap();

        std::fs::write(
            dir.path().join("index.json"),
            r#"{"defaultStoreId": "driftline", "storeIds": ["driftline"]}"#,
        )
        .unwrap();
        std::fs::write(
            store_dir.join("store.json"),
            sample_store_config_json("driftline"),
        )
        .unwrap();
        std::fs::write(store_dir.join("content.json"), sample_content_json()).unwrap();
        std::fs::write(
            store_dir.join("products.json"),
            r#"[{
                "id": "p1", "handle": "mug", "title": "Mug", "description": "",
                "price": {"current": 14.0, "currency": "USD"},
                "variants": [{"id": "v1", "title": "Default"}]
            }]"#,
        )
        .unwrap();
        std::fs::write(
            store_dir.join("collections.json"),
            r#"[{"id": "c1", "handle": "all", "title": "All", "productHandles": ["mug", "ghost"]}]"#,
        )
        .unwrap();
        std::fs::write(
            store_dir.join("legal.json"),
            r#"{
                "privacy": {"title": "Privacy", "updated": "2025-06-01", "sections": []},
                "terms": {"title": "Terms", "updated": "2025-06-01", "sections": []}
            }"#,
        )
        .unwrap();

        let index = StoreIndex::load(dir.path()).unwrap();
        let store_id = index.resolve(None);
        let dataset = StoreDataset::load(dir.path(), &store_id).unwrap();

        assert_eq!(dataset.config.brand.name, "Driftline");
        assert_eq!(dataset.products.len(), 1);
        assert!(dataset.product_by_handle("mug").is_some());
        assert!(dataset.product_by_handle("ghost").is_none());

        // Unknown handles inside a collection are skipped, not errors.
        let collection = dataset.collection_by_handle("all").unwrap();
        let products = dataset.products_in_collection(collection);
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreDataset::load(dir.path(), &StoreId::new("nope")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { path, .. } if path.ends_with("store.json")));
    }

    pub(crate) fn sample_store_config_json(id: &str) -> String {
        format!(
            r##"{{
            "id": "{id}",
            "brand": {{"name": "Driftline", "logoPath": "/static/images/logo.svg"}},
            "theme": {{
                "colors": {{
                    "background": "#faf8f5", "foreground": "#1f2421", "muted": "#6d7a72",
                    "accent": "#0f5c4e", "accentMuted": "#d9e8e3", "border": "#e3ded6",
                    "surface": "#ffffff"
                }},
                "typography": {{"display": "'Fraunces', serif", "body": "'Inter', sans-serif"}},
                "radii": {{"sm": "4px", "md": "8px", "lg": "16px", "pill": "999px"}},
                "spacing": {{"sectionY": "5rem", "containerX": "1.5rem"}},
                "shadows": {{"sm": "none", "md": "none", "lg": "none"}}
            }},
            "navigation": {{"header": [{{"label": "Shop", "href": "/products"}}], "footer": []}},
            "trust": [],
            "money": {{"currency": "USD", "locale": "en-US"}},
            "commerce": {{
                "ctas": {{
                    "addToCart": {{"label": "Add to cart", "successLabel": "Added"}},
                    "checkout": {{"label": "Check out", "href": "/checkout"}}
                }},
                "cart": {{
                    "title": "Your cart", "emptyTitle": "Your cart is empty",
                    "subtotalLabel": "Subtotal", "quantityLabel": "Qty",
                    "removeLabel": "Remove", "decreaseLabel": "Decrease",
                    "increaseLabel": "Increase"
                }},
                "checkout": {{
                    "title": "Checkout",
                    "steps": {{"contact": "Contact", "shipping": "Shipping", "payment": "Payment"}},
                    "contact": {{"title": "Contact", "emailLabel": "Email", "phoneLabel": "Phone"}},
                    "shipping": {{
                        "title": "Shipping", "firstNameLabel": "First name",
                        "lastNameLabel": "Last name", "addressLabel": "Address",
                        "cityLabel": "City", "postalLabel": "Postal code",
                        "countryLabel": "Country"
                    }},
                    "payment": {{"title": "Payment"}},
                    "summary": {{
                        "title": "Summary", "subtotalLabel": "Subtotal",
                        "shippingLabel": "Shipping", "taxLabel": "Tax", "totalLabel": "Total"
                    }},
                    "actions": {{"nextLabel": "Continue", "backLabel": "Back"}},
                    "placeOrderLabel": "Place order",
                    "confirmation": {{"title": "Thank you!"}}
                }}
            }}
        }}"##
        )
    }

    pub(crate) fn sample_content_json() -> &'static str {
        r#"{
            "home": {"seo": {"title": "Driftline"}, "blocks": [
                {"id": "hero", "type": "hero", "title": "Goods for slow mornings"}
            ]},
            "about": {"seo": {"title": "About"}, "blocks": []},
            "contact": {"seo": {"title": "Contact"}, "blocks": []}
        }"#
    }
}
