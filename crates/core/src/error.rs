//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Only deterministic domain failures live here. Unknown filter/sort
/// selectors are deliberately *not* errors; they degrade to defined
/// defaults so malformed selector state can never crash a view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. an out-of-range rating).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog invariant was violated (e.g. a duplicate product id).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// No product matches the requested identifier.
    #[error("not found")]
    NotFound,
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
