//! Collection types.

use serde::{Deserialize, Serialize};

use crate::types::id::CollectionId;

/// A curated group of products, referenced by product handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    /// URL slug, unique within a store.
    pub handle: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ordered product handles; unknown handles are skipped at render time.
    #[serde(default)]
    pub product_handles: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_dataset_collection() {
        let collection: Collection = serde_json::from_str(
            r#"{
                "id": "col_new",
                "handle": "new-arrivals",
                "title": "New Arrivals",
                "productHandles": ["harbor-tee", "sea-salt-candle"]
            }"#,
        )
        .unwrap();
        assert_eq!(collection.handle, "new-arrivals");
        assert_eq!(collection.product_handles.len(), 2);
        assert!(collection.description.is_none());
    }
}
