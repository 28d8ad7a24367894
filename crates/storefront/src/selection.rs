//! Selector types and per-view selection state.
//!
//! Selectors arrive as raw strings from routes and query state, so each
//! enumeration carries an explicit degradation branch instead of failing:
//! an unrecognized filter renders an empty shop, an unrecognized sort key
//! falls back to the featured order. Views own their mutable selection
//! slots exclusively and re-invoke the pure engine functions on change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use aluna_catalog::{CatalogStore, Product, ProductCategory};

use crate::engine;

/// Shop filter selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Show the whole catalog, untouched.
    #[default]
    All,
    /// Show only products tagged with one category.
    Only(ProductCategory),
    /// A key outside the closed enumeration; filters to an empty view.
    Unknown,
}

impl CategoryFilter {
    /// Map a raw selector key to a filter.
    ///
    /// `"all"` and the known category spellings are recognized; anything
    /// else becomes [`CategoryFilter::Unknown`], a defined outcome rather
    /// than an error.
    pub fn parse(key: &str) -> Self {
        if key == "all" {
            return Self::All;
        }
        match ProductCategory::parse(key) {
            Some(category) => Self::Only(category),
            None => {
                debug!(key, "unrecognized category filter, view will be empty");
                Self::Unknown
            }
        }
    }
}

/// Shop sort selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Authoring order; the catalog has no rank field beyond position.
    #[default]
    Featured,
    /// Ascending price, ties keep their authoring order.
    PriceLow,
    /// Descending price, ties keep their authoring order.
    PriceHigh,
    /// Reverse authoring order; stands in for recency until the catalog
    /// carries a real ordering field.
    Newest,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    /// Map a raw selector key to a sort order.
    ///
    /// Unsupported keys fall back to [`SortKey::Featured`] so a stale or
    /// malformed sort selector can never break the shop view.
    pub fn parse(key: &str) -> Self {
        match key {
            "featured" => Self::Featured,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "newest" => Self::Newest,
            _ => {
                debug!(key, "unsupported sort key, falling back to featured");
                Self::Featured
            }
        }
    }
}

/// Mutable selector slots owned by the shop view.
///
/// The catalog itself never changes; a view mutates its own selection and
/// re-derives the product sequence through [`engine::browse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopSelection {
    filter: CategoryFilter,
    sort: SortKey,
}

impl ShopSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Re-derive the shop shelf for the current selection.
    pub fn apply<'a>(&self, store: &'a CatalogStore) -> Vec<&'a Product> {
        engine::browse(store.products(), self.filter, self.sort)
    }
}

/// Sizes offered across the catalog, in display order.
pub const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

const DEFAULT_SIZE: &str = "M";

/// Mutable selector slots owned by a product detail view.
///
/// Transient per-view state only: discarded on navigation, never fed back
/// into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSelection {
    size: &'static str,
    quantity: u32,
    image_index: usize,
}

impl Default for DetailSelection {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            quantity: 1,
            image_index: 0,
        }
    }
}

impl DetailSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> &'static str {
        self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Select a size; anything outside [`SIZES`] leaves the selection as-is.
    pub fn select_size(&mut self, size: &str) {
        if let Some(known) = SIZES.iter().find(|s| **s == size) {
            self.size = known;
        }
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Quantity never drops below one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn select_image(&mut self, index: usize) {
        self.image_index = index;
    }
}
