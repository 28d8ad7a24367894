use std::collections::HashSet;

use aluna_core::{CatalogError, CatalogResult, ProductId};

use crate::{CategoryTile, Collection, Product, Testimonial};

/// Immutable catalog of everything the storefront can show.
///
/// Constructed once at startup; afterwards every view borrows it read-only.
/// Product order is significant: authoring order doubles as the "featured"
/// order, and there is no separate rank field.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<CategoryTile>,
    collections: Vec<Collection>,
    testimonials: Vec<Testimonial>,
}

impl CatalogStore {
    /// Assemble a catalog, rejecting duplicate product ids so that lookups
    /// by id stay unambiguous.
    pub fn new(
        products: Vec<Product>,
        categories: Vec<CategoryTile>,
        collections: Vec<Collection>,
        testimonials: Vec<Testimonial>,
    ) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::invariant(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self {
            products,
            categories,
            collections,
            testimonials,
        })
    }

    /// Full catalog in stable authoring order. Never fails, no side effects.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Navigation tiles, an enumeration independent of product categories.
    pub fn categories(&self) -> &[CategoryTile] {
        &self.categories
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Exact-id lookup. The catalog is small enough that a linear scan over
    /// the single canonical ordering beats keeping an index in sync.
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Resolve a collection's members in their curated order. Ids that do
    /// not resolve are skipped rather than treated as an error.
    pub fn collection_products(&self, collection: &Collection) -> Vec<&Product> {
        collection
            .product_ids
            .iter()
            .filter_map(|id| self.find_product(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProductCategory;

    fn fixture() -> Vec<Product> {
        vec![
            Product::new("1", "Pijama Silk Rosa", 89_000, "product-1.jpg", Some(ProductCategory::Pajamas)),
            Product::new("2", "Conjunto Satín Crema", 95_000, "product-2.jpg", Some(ProductCategory::Sets)),
            Product::new("3", "Set de Accesorios", 45_000, "product-3.jpg", Some(ProductCategory::Accessories)),
        ]
    }

    fn store(products: Vec<Product>) -> CatalogStore {
        CatalogStore::new(products, Vec::new(), Vec::new(), Vec::new()).unwrap()
    }

    #[test]
    fn new_rejects_duplicate_product_ids() {
        let mut products = fixture();
        products.push(Product::new("2", "Duplicado", 10_000, "dup.jpg", None));

        let err = CatalogStore::new(products, Vec::new(), Vec::new(), Vec::new()).unwrap_err();
        match err {
            CatalogError::InvariantViolation(msg) => assert!(msg.contains("2")),
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn products_preserve_authoring_order() {
        let store = store(fixture());
        let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn find_product_matches_exact_id() {
        let store = store(fixture());
        let product = store.find_product(&ProductId::new("2")).unwrap();
        assert_eq!(product.name, "Conjunto Satín Crema");
        assert!(store.find_product(&ProductId::new("9")).is_none());
    }

    #[test]
    fn collection_products_resolve_in_curated_order() {
        let collection = Collection::new(
            "Favoritas",
            "Selección curada",
            vec![ProductId::new("3"), ProductId::new("1")],
        );
        let store = store(fixture());

        let ids: Vec<&str> = store
            .collection_products(&collection)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn collection_products_skip_unresolvable_ids() {
        let collection = Collection::new(
            "Con huecos",
            "Referencia a un id retirado",
            vec![ProductId::new("1"), ProductId::new("99"), ProductId::new("2")],
        );
        let store = store(fixture());

        let ids: Vec<&str> = store
            .collection_products(&collection)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn numbered_products(count: usize) -> Vec<Product> {
            (0..count)
                .map(|i| {
                    Product::new(format!("{i}"), format!("Producto {i}"), 1_000, "a.jpg", None)
                })
                .collect()
        }

        proptest! {
            #[test]
            fn distinct_ids_always_construct(count in 0usize..32) {
                let products = numbered_products(count);
                prop_assert!(
                    CatalogStore::new(products, Vec::new(), Vec::new(), Vec::new()).is_ok()
                );
            }

            #[test]
            fn any_duplicated_id_is_rejected(count in 1usize..32, pick in 0usize..32) {
                let pick = pick % count;
                let mut products = numbered_products(count);
                products.push(Product::new(format!("{pick}"), "Duplicado", 9_000, "d.jpg", None));
                prop_assert!(
                    CatalogStore::new(products, Vec::new(), Vec::new(), Vec::new()).is_err()
                );
            }
        }
    }
}
