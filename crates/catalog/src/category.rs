use serde::{Deserialize, Serialize};

/// Navigational grouping tile.
///
/// Pure presentation tuple: the `link` is an opaque target view identifier
/// handed to the external router. Not to be confused with
/// [`crate::ProductCategory`], the filter tag on products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTile {
    pub title: String,
    pub image: String,
    pub link: String,
    pub description: String,
}

impl CategoryTile {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            link: link.into(),
            description: description.into(),
        }
    }
}
