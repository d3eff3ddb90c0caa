//! Application state shared across handlers.

use std::sync::Arc;

use tidemark_core::StoreId;

use crate::cart::{CartStorage, CartStore, DetachedCartStorage, FileCartStorage};
use crate::checkout::{MockPaymentProvider, PaymentProvider};
use crate::config::StorefrontConfig;
use crate::dataset::{DatasetError, StoreDataset, StoreIndex};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the active store's dataset, the cart
/// store, and the payment provider - injected here rather than living as
/// module globals, so tests construct isolated instances.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store_id: StoreId,
    dataset: StoreDataset,
    carts: CartStore,
    payments: Arc<dyn PaymentProvider>,
}

impl AppState {
    /// Build state from configuration: resolve the active store from the
    /// dataset index, load its dataset, and wire cart storage.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] when the index or the active store's
    /// dataset cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, DatasetError> {
        let index = StoreIndex::load(&config.data_dir)?;
        let store_id = index.resolve(config.store_id.as_ref());
        let dataset = StoreDataset::load(&config.data_dir, &store_id)?;

        let storage: Arc<dyn CartStorage> = match &config.cart_dir {
            Some(dir) => Arc::new(FileCartStorage::new(dir.clone())),
            None => {
                tracing::warn!("No cart directory configured, carts will not be durable");
                Arc::new(DetachedCartStorage::new())
            }
        };

        Ok(Self::assemble(
            config,
            store_id,
            dataset,
            CartStore::new(storage),
            Arc::new(MockPaymentProvider::new()),
        ))
    }

    /// Assemble state from already-built parts (used directly by tests).
    #[must_use]
    pub fn assemble(
        config: StorefrontConfig,
        store_id: StoreId,
        dataset: StoreDataset,
        carts: CartStore,
        payments: Arc<dyn PaymentProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store_id,
                dataset,
                carts,
                payments,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The active tenant this process is serving.
    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.inner.store_id
    }

    /// Get a reference to the active store's dataset.
    #[must_use]
    pub fn dataset(&self) -> &StoreDataset {
        &self.inner.dataset
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Get a reference to the payment provider.
    #[must_use]
    pub fn payments(&self) -> &dyn PaymentProvider {
        self.inner.payments.as_ref()
    }
}
