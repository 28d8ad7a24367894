//! Pure filter/sort derivations over the immutable catalog.
//!
//! A shelf entry carries its catalog position alongside the product so that
//! the position-keyed orders (`Featured`, `Newest`) are real sorts rather
//! than sequence reversals. That keeps every sort idempotent and lets the
//! engine compose in any order without hidden state.

use serde::Serialize;

use aluna_catalog::Product;

use crate::selection::{CategoryFilter, SortKey};

/// One slot of a derived shop view: a borrowed product plus its position
/// in catalog authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShelfItem<'a> {
    /// Index in the authored catalog; doubles as the featured rank and the
    /// recency stand-in.
    pub position: usize,
    pub product: &'a Product,
}

/// Index a product sequence into shelf entries, preserving its order.
pub fn shelf(products: &[Product]) -> Vec<ShelfItem<'_>> {
    products
        .iter()
        .enumerate()
        .map(|(position, product)| ShelfItem { position, product })
        .collect()
}

/// Stable category filter: surviving entries keep their relative order.
///
/// [`CategoryFilter::Unknown`] yields an empty shelf, a defined outcome
/// rather than a fault.
pub fn filter_by_category<'a>(
    view: Vec<ShelfItem<'a>>,
    filter: CategoryFilter,
) -> Vec<ShelfItem<'a>> {
    match filter {
        CategoryFilter::All => view,
        CategoryFilter::Only(category) => view
            .into_iter()
            .filter(|item| item.product.category == Some(category))
            .collect(),
        CategoryFilter::Unknown => Vec::new(),
    }
}

/// Stable sort of a derived shelf.
///
/// Price orders break ties by authoring position implicitly (the sort is
/// stable and inputs arrive in position order). `Newest` sorts by
/// descending position: with no timestamp on record, reverse authoring
/// order stands in for recency.
pub fn sort_products<'a>(mut view: Vec<ShelfItem<'a>>, key: SortKey) -> Vec<ShelfItem<'a>> {
    match key {
        SortKey::Featured => view.sort_by_key(|item| item.position),
        SortKey::PriceLow => view.sort_by_key(|item| item.product.price),
        SortKey::PriceHigh => view.sort_by_key(|item| core::cmp::Reverse(item.product.price)),
        SortKey::Newest => view.sort_by_key(|item| core::cmp::Reverse(item.position)),
    }
    view
}

/// Derive the shop view for a filter and sort selection.
///
/// Composition contract: filter first, then sort.
pub fn browse<'a>(
    products: &'a [Product],
    filter: CategoryFilter,
    key: SortKey,
) -> Vec<&'a Product> {
    sort_products(filter_by_category(shelf(products), filter), key)
        .into_iter()
        .map(|item| item.product)
        .collect()
}

/// The home page's featured row: the first `limit` products in authoring
/// order.
pub fn featured_products(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().take(limit).collect()
}
