//! Content block view construction.
//!
//! Dataset blocks are a closed tagged union; this module dispatches them
//! exhaustively into render-ready view structs, resolving any references
//! (collection handles, store-level trust items) against the dataset. The
//! match below is the single dispatch point - a new block variant fails
//! compilation here and in the template until both handle it.

use crate::dataset::{
    CallToAction, ContactMethod, ContentBlock, FeatureItem, StoreDataset, StripImage, Testimonial,
    TrustItem, TrustSource,
};

/// Hero banner view.
#[derive(Clone)]
pub struct HeroView {
    pub title: String,
    pub subtitle: Option<String>,
    pub cta: Option<CallToAction>,
    pub image: Option<String>,
    pub image_alt: String,
}

/// A collection card inside a featured-collections block.
#[derive(Clone)]
pub struct CollectionCard {
    pub handle: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Featured collections view.
#[derive(Clone)]
pub struct FeaturedCollectionsView {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta: Option<CallToAction>,
    pub collections: Vec<CollectionCard>,
}

/// Feature grid view.
#[derive(Clone)]
pub struct FeatureGridView {
    pub title: Option<String>,
    pub items: Vec<FeatureItem>,
}

/// Image strip view.
#[derive(Clone)]
pub struct ImageStripView {
    pub title: Option<String>,
    pub images: Vec<StripImage>,
}

/// Testimonials view.
#[derive(Clone)]
pub struct TestimonialsView {
    pub title: Option<String>,
    pub items: Vec<Testimonial>,
}

/// Trust bar view, items already resolved from their source.
#[derive(Clone)]
pub struct TrustBarView {
    pub title: Option<String>,
    pub items: Vec<TrustItem>,
}

/// Promo banner view.
#[derive(Clone)]
pub struct PromoBannerView {
    pub text: String,
    pub cta: Option<CallToAction>,
}

/// Call-to-action section view.
#[derive(Clone)]
pub struct CtaSectionView {
    pub title: String,
    pub description: Option<String>,
    pub cta: CallToAction,
    pub image: Option<String>,
    pub image_alt: String,
}

/// Rich text view.
#[derive(Clone)]
pub struct RichTextView {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

/// Contact methods view.
#[derive(Clone)]
pub struct ContactView {
    pub title: Option<String>,
    pub methods: Vec<ContactMethod>,
}

/// A render-ready content block.
#[derive(Clone)]
pub enum BlockView {
    Hero(HeroView),
    FeaturedCollections(FeaturedCollectionsView),
    FeatureGrid(FeatureGridView),
    ImageStrip(ImageStripView),
    Testimonials(TestimonialsView),
    TrustBar(TrustBarView),
    PromoBanner(PromoBannerView),
    CtaSection(CtaSectionView),
    RichText(RichTextView),
    Contact(ContactView),
}

/// Build views for a page's block list.
#[must_use]
pub fn build_block_views(blocks: &[ContentBlock], dataset: &StoreDataset) -> Vec<BlockView> {
    blocks
        .iter()
        .map(|block| build_block_view(block, dataset))
        .collect()
}

fn build_block_view(block: &ContentBlock, dataset: &StoreDataset) -> BlockView {
    match block {
        ContentBlock::Hero {
            title,
            subtitle,
            cta,
            image,
            image_alt,
            ..
        } => BlockView::Hero(HeroView {
            title: title.clone(),
            subtitle: subtitle.clone(),
            cta: cta.clone(),
            image: image.clone(),
            image_alt: image_alt.clone().unwrap_or_else(|| title.clone()),
        }),
        ContentBlock::FeaturedCollections {
            title,
            subtitle,
            cta,
            collection_handles,
            ..
        } => BlockView::FeaturedCollections(FeaturedCollectionsView {
            title: title.clone(),
            subtitle: subtitle.clone(),
            cta: cta.clone(),
            collections: collection_handles
                .iter()
                .filter_map(|handle| collection_card(handle, dataset))
                .collect(),
        }),
        ContentBlock::FeatureGrid { title, items, .. } => BlockView::FeatureGrid(FeatureGridView {
            title: title.clone(),
            items: items.clone(),
        }),
        ContentBlock::ImageStrip { title, images, .. } => BlockView::ImageStrip(ImageStripView {
            title: title.clone(),
            images: images.clone(),
        }),
        ContentBlock::Testimonials { title, items, .. } => {
            BlockView::Testimonials(TestimonialsView {
                title: title.clone(),
                items: items.clone(),
            })
        }
        ContentBlock::TrustBar {
            title,
            source,
            items,
            ..
        } => BlockView::TrustBar(TrustBarView {
            title: title.clone(),
            items: match source {
                TrustSource::Store => dataset.config.trust.clone(),
                TrustSource::Content => items.clone().unwrap_or_default(),
            },
        }),
        ContentBlock::PromoBanner { text, cta, .. } => BlockView::PromoBanner(PromoBannerView {
            text: text.clone(),
            cta: cta.clone(),
        }),
        ContentBlock::CtaSection {
            title,
            description,
            cta,
            image,
            image_alt,
            ..
        } => BlockView::CtaSection(CtaSectionView {
            title: title.clone(),
            description: description.clone(),
            cta: cta.clone(),
            image: image.clone(),
            image_alt: image_alt.clone().unwrap_or_else(|| title.clone()),
        }),
        ContentBlock::RichText {
            title, paragraphs, ..
        } => BlockView::RichText(RichTextView {
            title: title.clone(),
            paragraphs: paragraphs.clone(),
        }),
        ContentBlock::Contact { title, methods, .. } => BlockView::Contact(ContactView {
            title: title.clone(),
            methods: methods.clone(),
        }),
    }
}

/// Resolve one collection handle to a card; unknown handles are skipped.
fn collection_card(handle: &str, dataset: &StoreDataset) -> Option<CollectionCard> {
    let collection = dataset.collection_by_handle(handle)?;

    // Fall back to the first product's image when the collection has none.
    let image = collection.image.clone().or_else(|| {
        dataset
            .products_in_collection(collection)
            .first()
            .and_then(|product| product.featured_image())
            .map(ToOwned::to_owned)
    });

    Some(CollectionCard {
        handle: collection.handle.clone(),
        title: collection.title.clone(),
        description: collection.description.clone(),
        image,
    })
}
