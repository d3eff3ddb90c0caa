//! Persisted, observable, tenant-keyed cart state.
//!
//! [`store::CartStore`] is the single source of truth for cart line items.
//! All mutation flows through its operations; nothing else may touch the
//! storage keys it owns, or the merge/removal/notify invariants break.

pub mod storage;
pub mod store;

pub use storage::{
    CartStorage, DetachedCartStorage, FileCartStorage, MemoryCartStorage, StorageError,
    storage_key,
};
pub use store::{CartStore, CartSubscription};
