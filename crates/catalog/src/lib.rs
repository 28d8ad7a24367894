//! Catalog domain module for the Aluna storefront.
//!
//! This crate owns the immutable product/category/collection/testimonial
//! definitions, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). Everything is constructed once at startup and read
//! through shared references for the life of the process.

pub mod category;
pub mod collection;
pub mod product;
pub mod seed;
pub mod store;
pub mod testimonial;

pub use category::CategoryTile;
pub use collection::Collection;
pub use product::{Product, ProductCategory};
pub use seed::seed;
pub use store::CatalogStore;
pub use testimonial::Testimonial;
