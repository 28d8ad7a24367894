use serde::Serialize;

use aluna_core::{CatalogError, CatalogResult};

/// Customer testimonial shown on the home page.
///
/// The rating is validated at construction so the renderer can draw exactly
/// `star_count()` filled indicators without re-checking the range. Fields
/// stay private to keep that invariant airtight; there is no `Deserialize`
/// because testimonials are authored in code, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    name: String,
    image: String,
    text: String,
    rating: u8,
}

impl Testimonial {
    /// Build a testimonial; the rating must sit within `1..=5`.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        text: impl Into<String>,
        rating: u8,
    ) -> CatalogResult<Self> {
        if !(1..=5).contains(&rating) {
            return Err(CatalogError::validation(format!(
                "rating must be within 1..=5, got {rating}"
            )));
        }
        Ok(Self {
            name: name.into(),
            image: image.into(),
            text: text.into(),
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Number of filled indicators to render: exactly the rating, never
    /// negative or fractional.
    pub fn star_count(&self) -> usize {
        usize::from(self.rating)
    }
}
