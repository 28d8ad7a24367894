//! Single-product resolution for the detail view.

use serde::Serialize;

use aluna_catalog::{CatalogStore, Product};
use aluna_core::{CatalogError, CatalogResult, ProductId};

/// A resolved detail view: the product on display plus the shelf shown
/// under "you may also like".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView<'a> {
    pub product: &'a Product,
    pub related: Vec<&'a Product>,
}

/// Exact-id lookup.
///
/// Absent ids fail with [`CatalogError::NotFound`]; the caller decides the
/// user-visible fallback, no default product is substituted here.
pub fn get_product<'a>(store: &'a CatalogStore, id: &ProductId) -> CatalogResult<&'a Product> {
    store.find_product(id).ok_or(CatalogError::NotFound)
}

/// Up to `limit` companions for a detail page: the first products in
/// authoring order, excluding the one on display.
pub fn related_products<'a>(
    store: &'a CatalogStore,
    id: &ProductId,
    limit: usize,
) -> Vec<&'a Product> {
    store
        .products()
        .iter()
        .filter(|product| &product.id != id)
        .take(limit)
        .collect()
}

/// Resolve a product and its related shelf in one call.
pub fn resolve_detail<'a>(
    store: &'a CatalogStore,
    id: &ProductId,
    related_limit: usize,
) -> CatalogResult<DetailView<'a>> {
    let product = get_product(store, id)?;
    let related = related_products(store, id, related_limit);
    Ok(DetailView { product, related })
}
