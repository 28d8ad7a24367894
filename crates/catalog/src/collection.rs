use serde::{Deserialize, Serialize};

use aluna_core::ProductId;

/// Curated, ordered grouping of products for a themed showcase.
///
/// Members are referenced by id; the same product may appear in any number
/// of collections (no exclusivity invariant). Resolution to products goes
/// through [`crate::CatalogStore::collection_products`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub title: String,
    pub description: String,
    pub product_ids: Vec<ProductId>,
}

impl Collection {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        product_ids: Vec<ProductId>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            product_ids,
        }
    }
}
