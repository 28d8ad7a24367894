use serde::{Deserialize, Serialize};

use aluna_core::ProductId;

/// Product classification tag used for shop filtering.
///
/// A closed enumeration; distinct from [`crate::CategoryTile`], which is a
/// navigational grouping that happens to share the "category" name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Pajamas,
    Accessories,
    Sets,
}

impl ProductCategory {
    /// Every member of the closed enumeration, in display order.
    pub const ALL: [ProductCategory; 3] = [Self::Pajamas, Self::Accessories, Self::Sets];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pajamas => "pajamas",
            Self::Accessories => "accessories",
            Self::Sets => "sets",
        }
    }

    /// Parse the lowercase wire spelling. Anything outside the closed
    /// enumeration is `None`; callers decide how to degrade.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "pajamas" => Some(Self::Pajamas),
            "accessories" => Some(Self::Accessories),
            "sets" => Some(Self::Sets),
            _ => None,
        }
    }
}

/// Catalog entry: a single sellable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in whole currency units; the catalog carries no decimals.
    pub price: u64,
    /// Opaque asset reference, never interpreted by catalog logic.
    pub image: String,
    /// `None` means uncategorized: reachable only through the `All` filter.
    pub category: Option<ProductCategory>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        image: impl Into<String>,
        category: Option<ProductCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_recognizes_every_member() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn category_parse_returns_none_outside_the_enumeration() {
        assert_eq!(ProductCategory::parse("robes"), None);
        assert_eq!(ProductCategory::parse(""), None);
        assert_eq!(ProductCategory::parse("Pajamas"), None);
    }
}
