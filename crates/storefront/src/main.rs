//! Demo driver: seeds the catalog and walks the full view-model surface.
//!
//! Output goes through `tracing`; run with `RUST_LOG=debug` to also see the
//! selector fallback events.

use anyhow::Result;
use tracing::info;

use aluna_catalog::{CatalogStore, seed};
use aluna_core::{CatalogError, ProductId};
use aluna_storefront::{CategoryFilter, ShopSelection, SortKey, resolve_detail};

fn main() -> Result<()> {
    aluna_observability::init();

    let store = seed()?;
    info!(
        products = store.products().len(),
        categories = store.categories().len(),
        collections = store.collections().len(),
        testimonials = store.testimonials().len(),
        "catalog ready"
    );

    render_shop(&store, "pajamas", "price-low")?;
    render_shop(&store, "all", "newest")?;
    render_shop(&store, "robes", "featured")?;

    render_detail(&store, "1")?;
    render_detail(&store, "99")?;

    for collection in store.collections() {
        let members = store.collection_products(collection);
        info!(
            title = %collection.title,
            members = members.len(),
            "collection view"
        );
    }

    Ok(())
}

fn render_shop(store: &CatalogStore, filter_key: &str, sort_key: &str) -> Result<()> {
    let mut selection = ShopSelection::new();
    selection.set_filter(CategoryFilter::parse(filter_key));
    selection.set_sort(SortKey::parse(sort_key));

    let view = selection.apply(store);
    info!(
        filter_key,
        sort_key,
        shelf = %serde_json::to_string(&view)?,
        "shop view"
    );
    Ok(())
}

fn render_detail(store: &CatalogStore, raw_id: &str) -> Result<()> {
    let id = ProductId::new(raw_id);
    match resolve_detail(store, &id, 3) {
        Ok(view) => info!(
            id = %id,
            product = %view.product.name,
            related = view.related.len(),
            "detail view"
        ),
        Err(CatalogError::NotFound) => info!(id = %id, "product not found, caller picks the fallback"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
