//! Storefront view model for the Aluna catalog.
//!
//! Pure derivations over the immutable [`aluna_catalog::CatalogStore`]: the
//! shop's filter/sort engine, the product detail resolver, and the explicit
//! per-view selection state that drives them. No hidden state anywhere —
//! every operation is a deterministic function of the catalog and the
//! caller-supplied selectors, so views can re-derive on every change.

pub mod detail;
pub mod engine;
pub mod selection;

pub use detail::{DetailView, get_product, related_products, resolve_detail};
pub use engine::{ShelfItem, browse, featured_products, filter_by_category, shelf, sort_products};
pub use selection::{CategoryFilter, DetailSelection, SIZES, ShopSelection, SortKey};
