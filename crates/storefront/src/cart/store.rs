//! The tenant-keyed, persisted, observable cart store.
//!
//! One logical cart per store ID. State is lazily loaded from the storage
//! backend on first access per tenant per process lifetime, every mutation
//! persists before subscribers are notified, and tenants are fully isolated:
//! distinct storage keys, distinct listener sets.
//!
//! The store is an explicit injected object (held in application state),
//! not a module-level singleton, so tests get a fresh one each time.
//!
//! Mutations are serialized by an internal mutex; a mutation runs to
//! completion - load, apply, persist - before another can start for any
//! tenant. Listeners run outside the state lock, so a listener may re-read
//! the store freely.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tidemark_core::{CartLineItem, ProductId, StoreId, VariantId};

use crate::cart::storage::{CartStorage, storage_key};

type Listener = Arc<dyn Fn() + Send + Sync>;
type ListenerMap = HashMap<StoreId, Vec<(u64, Listener)>>;

#[derive(Default)]
struct CartState {
    carts: HashMap<StoreId, Vec<CartLineItem>>,
    loaded: HashSet<StoreId>,
}

/// Single source of truth for persisted cart line items.
pub struct CartStore {
    storage: Arc<dyn CartStorage>,
    state: Mutex<CartState>,
    listeners: Arc<Mutex<ListenerMap>>,
    next_subscription_id: AtomicU64,
}

impl CartStore {
    /// Create a store over a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(CartState::default()),
            listeners: Arc::new(Mutex::new(ListenerMap::new())),
            next_subscription_id: AtomicU64::new(0),
        }
    }

    /// Snapshot of a tenant's cart lines.
    ///
    /// Lazily loads from storage on the first access for this tenant; a
    /// missing or corrupt persisted value reads as an empty cart.
    #[must_use]
    pub fn items(&self, store_id: &StoreId) -> Vec<CartLineItem> {
        let mut state = self.lock_state();
        self.load_if_needed(&mut state, store_id);
        state.carts.get(store_id).cloned().unwrap_or_default()
    }

    /// Add a line, merging by `(product_id, variant_id)` identity.
    ///
    /// An existing line's quantity is incremented by `item.quantity`; a new
    /// identity is appended. Adding a zero quantity is a no-op - the store
    /// never holds a line with quantity 0.
    pub fn add_item(&self, store_id: &StoreId, item: CartLineItem) {
        if item.quantity == 0 {
            return;
        }

        self.mutate(store_id, |items| {
            if let Some(existing) = items
                .iter_mut()
                .find(|line| line.matches(&item.product_id, &item.variant_id))
            {
                existing.quantity += item.quantity;
            } else {
                items.push(item);
            }
        });
    }

    /// Set a line's quantity (replace, not increment).
    ///
    /// A quantity of zero delegates to [`Self::remove_item`]. When no line
    /// matches, the cart is unchanged but still persisted and notified,
    /// matching removal's idempotent-but-observable behavior.
    pub fn update_quantity(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
        variant_id: &VariantId,
        quantity: u32,
    ) {
        if quantity == 0 {
            self.remove_item(store_id, product_id, variant_id);
            return;
        }

        self.mutate(store_id, |items| {
            if let Some(line) = items
                .iter_mut()
                .find(|line| line.matches(product_id, variant_id))
            {
                line.quantity = quantity;
            }
        });
    }

    /// Remove the line with the given identity pair.
    ///
    /// Persists and notifies even when nothing matched.
    pub fn remove_item(&self, store_id: &StoreId, product_id: &ProductId, variant_id: &VariantId) {
        self.mutate(store_id, |items| {
            items.retain(|line| !line.matches(product_id, variant_id));
        });
    }

    /// Empty a tenant's cart. Safe on an already-empty cart.
    pub fn clear(&self, store_id: &StoreId) {
        self.mutate(store_id, Vec::clear);
    }

    /// Register a listener for one tenant's mutations.
    ///
    /// The listener runs after every successful mutation of that tenant's
    /// cart, strictly after the persistence write; it carries no payload -
    /// re-read [`Self::items`]. Mutations of other tenants never fire it.
    /// Dropping the returned [`CartSubscription`] unregisters the listener.
    #[must_use]
    pub fn subscribe(
        &self,
        store_id: &StoreId,
        listener: impl Fn() + Send + Sync + 'static,
    ) -> CartSubscription {
        let id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        self.lock_listeners()
            .entry(store_id.clone())
            .or_default()
            .push((id, Arc::new(listener)));

        CartSubscription {
            listeners: Arc::clone(&self.listeners),
            store_id: store_id.clone(),
            id,
        }
    }

    /// Apply a mutation to a tenant's lines, persist, then notify.
    fn mutate(&self, store_id: &StoreId, apply: impl FnOnce(&mut Vec<CartLineItem>)) {
        {
            let mut state = self.lock_state();
            self.load_if_needed(&mut state, store_id);
            let items = state.carts.entry(store_id.clone()).or_default();
            apply(items);
            self.persist(store_id, items);
        }
        self.notify(store_id);
    }

    /// Load a tenant's cart from storage on first access.
    ///
    /// Any failure - unreadable backend, unparseable JSON, invalid line
    /// data - degrades to an empty cart. Cart corruption must never crash
    /// checkout.
    fn load_if_needed(&self, state: &mut CartState, store_id: &StoreId) {
        if state.loaded.contains(store_id) {
            return;
        }
        state.loaded.insert(store_id.clone());

        let key = storage_key(store_id);
        let raw = match self.storage.read(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(store_id = %store_id, "Cart storage unreadable, starting empty: {e}");
                return;
            }
        };

        match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
            Ok(mut lines) => {
                let before = lines.len();
                lines.retain(|line| line.quantity > 0);
                if lines.len() < before {
                    tracing::warn!(
                        store_id = %store_id,
                        dropped = before - lines.len(),
                        "Dropped persisted cart lines with zero quantity"
                    );
                }
                state.carts.insert(store_id.clone(), lines);
            }
            Err(e) => {
                tracing::warn!(store_id = %store_id, "Corrupt persisted cart, starting empty: {e}");
            }
        }
    }

    /// Write a tenant's lines to storage. Failures are logged and swallowed;
    /// in-memory state stays authoritative for this process.
    fn persist(&self, store_id: &StoreId, items: &[CartLineItem]) {
        let key = storage_key(store_id);
        match serde_json::to_string(items) {
            Ok(json) => {
                if let Err(e) = self.storage.write(&key, &json) {
                    tracing::warn!(store_id = %store_id, "Failed to persist cart: {e}");
                }
            }
            Err(e) => {
                tracing::warn!(store_id = %store_id, "Failed to serialize cart: {e}");
            }
        }
    }

    /// Run all listeners registered for this tenant.
    fn notify(&self, store_id: &StoreId) {
        let to_call: Vec<Listener> = self
            .lock_listeners()
            .get(store_id)
            .map(|subscribers| {
                subscribers
                    .iter()
                    .map(|(_, listener)| Arc::clone(listener))
                    .collect()
            })
            .unwrap_or_default();

        for listener in to_call {
            listener();
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, ListenerMap> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Subscription handle; dropping it unregisters the listener.
pub struct CartSubscription {
    listeners: Arc<Mutex<ListenerMap>>,
    store_id: StoreId,
    id: u64,
}

impl Drop for CartSubscription {
    fn drop(&mut self) {
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(subscribers) = listeners.get_mut(&self.store_id) {
            subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::cart::storage::{DetachedCartStorage, MemoryCartStorage};

    fn line(product_id: &str, variant_id: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id: ProductId::new(product_id),
            variant_id: VariantId::new(variant_id),
            quantity,
        }
    }

    fn store_with_memory() -> (CartStore, Arc<MemoryCartStorage>) {
        let storage = Arc::new(MemoryCartStorage::new());
        let store = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
        (store, storage)
    }

    fn counting_listener(store: &CartStore, store_id: &StoreId) -> (Arc<AtomicUsize>, CartSubscription) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_in_listener = Arc::clone(&count);
        let subscription = store.subscribe(store_id, move || {
            count_in_listener.fetch_add(1, Ordering::SeqCst);
        });
        (count, subscription)
    }

    #[test]
    fn add_merges_lines_with_same_identity() {
        let (store, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        store.add_item(&tenant, line("p1", "v1", 1));
        store.add_item(&tenant, line("p1", "v1", 2));
        store.add_item(&tenant, line("p2", "v1", 1));
        store.add_item(&tenant, line("p1", "v1", 3));

        let items = store.items(&tenant);
        assert_eq!(items.len(), 2);
        assert_eq!(items, vec![line("p1", "v1", 6), line("p2", "v1", 1)]);
    }

    #[test]
    fn same_product_different_variant_is_a_distinct_line() {
        let (store, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        store.add_item(&tenant, line("p1", "v1", 1));
        store.add_item(&tenant, line("p1", "v2", 1));

        assert_eq!(store.items(&tenant).len(), 2);
    }

    #[test]
    fn update_quantity_replaces_rather_than_increments() {
        let (store, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        store.add_item(&tenant, line("p1", "v1", 5));
        store.update_quantity(&tenant, &ProductId::new("p1"), &VariantId::new("v1"), 2);

        assert_eq!(store.items(&tenant), vec![line("p1", "v1", 2)]);
    }

    #[test]
    fn update_quantity_zero_is_equivalent_to_remove() {
        let (updated, _) = store_with_memory();
        let (removed, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        for store in [&updated, &removed] {
            store.add_item(&tenant, line("p1", "v1", 3));
            store.add_item(&tenant, line("p2", "v2", 1));
        }

        updated.update_quantity(&tenant, &ProductId::new("p1"), &VariantId::new("v1"), 0);
        removed.remove_item(&tenant, &ProductId::new("p1"), &VariantId::new("v1"));

        assert_eq!(updated.items(&tenant), removed.items(&tenant));
        assert_eq!(updated.items(&tenant), vec![line("p2", "v2", 1)]);
    }

    #[test]
    fn remove_without_match_still_notifies_and_persists() {
        let (store, storage) = store_with_memory();
        let tenant = StoreId::new("harbor");
        let (count, _subscription) = counting_listener(&store, &tenant);

        store.remove_item(&tenant, &ProductId::new("ghost"), &VariantId::new("v"));

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            storage.raw(&storage_key(&tenant)).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn mutating_one_tenant_never_touches_another() {
        let (store, storage) = store_with_memory();
        let tenant_a = StoreId::new("harbor");
        let tenant_b = StoreId::new("outlet");

        store.add_item(&tenant_b, line("pb", "vb", 1));
        let (count_b, _subscription) = counting_listener(&store, &tenant_b);
        let snapshot_b = storage.raw(&storage_key(&tenant_b));

        store.add_item(&tenant_a, line("pa", "va", 2));
        store.clear(&tenant_a);

        assert_eq!(count_b.load(Ordering::SeqCst), 0);
        assert_eq!(storage.raw(&storage_key(&tenant_b)), snapshot_b);
        assert_eq!(store.items(&tenant_b), vec![line("pb", "vb", 1)]);
    }

    #[test]
    fn clear_is_idempotent() {
        let (store, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        store.add_item(&tenant, line("p1", "v1", 2));
        store.clear(&tenant);
        assert!(store.items(&tenant).is_empty());

        // Clearing an already-empty cart is safe and stays empty.
        store.clear(&tenant);
        assert!(store.items(&tenant).is_empty());
    }

    #[test]
    fn cart_round_trips_through_storage_across_restart() {
        let storage = Arc::new(MemoryCartStorage::new());
        let tenant = StoreId::new("harbor");

        {
            let store = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
            store.add_item(&tenant, line("p1", "v1", 2));
            store.add_item(&tenant, line("p2", "v2", 1));
        }

        // A fresh store over the same backend simulates a process restart.
        let revived = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
        assert_eq!(
            revived.items(&tenant),
            vec![line("p1", "v1", 2), line("p2", "v2", 1)]
        );
    }

    #[test]
    fn corrupt_persisted_value_degrades_to_empty_cart() {
        let storage = Arc::new(MemoryCartStorage::new());
        let tenant = StoreId::new("harbor");
        storage.seed(&storage_key(&tenant), "definitely not json");

        let store = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
        assert!(store.items(&tenant).is_empty());

        // Negative quantities fail deserialization and count as corruption.
        let tenant_b = StoreId::new("outlet");
        storage.seed(
            &storage_key(&tenant_b),
            r#"[{"productId":"p","variantId":"v","quantity":-2}]"#,
        );
        assert!(store.items(&tenant_b).is_empty());
    }

    #[test]
    fn zero_quantity_persisted_lines_are_dropped_on_load() {
        let storage = Arc::new(MemoryCartStorage::new());
        let tenant = StoreId::new("harbor");
        storage.seed(
            &storage_key(&tenant),
            r#"[
                {"productId":"p1","variantId":"v1","quantity":0},
                {"productId":"p2","variantId":"v2","quantity":3}
            ]"#,
        );

        let store = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
        assert_eq!(store.items(&tenant), vec![line("p2", "v2", 3)]);
    }

    #[test]
    fn lazily_loads_persisted_cart_on_first_read() {
        let storage = Arc::new(MemoryCartStorage::new());
        let tenant = StoreId::new("harbor");
        storage.seed(
            &storage_key(&tenant),
            r#"[{"productId":"p1","variantId":"v1","quantity":4}]"#,
        );

        let store = CartStore::new(Arc::<MemoryCartStorage>::clone(&storage));
        assert_eq!(store.items(&tenant), vec![line("p1", "v1", 4)]);
    }

    #[test]
    fn notification_fires_after_persistence() {
        let (store, storage) = store_with_memory();
        let tenant = StoreId::new("harbor");

        // The listener observes the already-persisted value.
        let observed = Arc::new(Mutex::new(None::<String>));
        let observed_in_listener = Arc::clone(&observed);
        let storage_in_listener = Arc::<MemoryCartStorage>::clone(&storage);
        let key = storage_key(&tenant);
        let _subscription = store.subscribe(&tenant, move || {
            *observed_in_listener
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = storage_in_listener.raw(&key);
        });

        store.add_item(&tenant, line("p1", "v1", 1));

        let raw = observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .expect("listener should have run");
        let persisted: Vec<CartLineItem> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, vec![line("p1", "v1", 1)]);
    }

    #[test]
    fn dropping_subscription_unregisters_listener() {
        let (store, _) = store_with_memory();
        let tenant = StoreId::new("harbor");

        let (count, subscription) = counting_listener(&store, &tenant);
        store.add_item(&tenant, line("p1", "v1", 1));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(subscription);
        store.add_item(&tenant, line("p1", "v1", 1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn add_with_zero_quantity_is_a_silent_no_op() {
        let (store, storage) = store_with_memory();
        let tenant = StoreId::new("harbor");
        let (count, _subscription) = counting_listener(&store, &tenant);

        store.add_item(&tenant, line("p1", "v1", 0));

        assert!(store.items(&tenant).is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(storage.raw(&storage_key(&tenant)).is_none());
    }

    #[test]
    fn detached_storage_keeps_in_memory_state_only() {
        let storage = Arc::new(DetachedCartStorage::new());
        let tenant = StoreId::new("harbor");

        let store = CartStore::new(Arc::<DetachedCartStorage>::clone(&storage));
        store.add_item(&tenant, line("p1", "v1", 1));

        // Visible in this process...
        assert_eq!(store.items(&tenant).len(), 1);

        // ...but a fresh store over the same backend sees nothing.
        let fresh = CartStore::new(storage);
        assert!(fresh.items(&tenant).is_empty());
    }
}
