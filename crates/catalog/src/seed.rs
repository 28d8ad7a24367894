//! The authored Aluna brand catalog.
//!
//! Order matters everywhere in this file: products are listed in featured
//! order, and the shop's "newest" view is derived from that same order.

use aluna_core::{CatalogResult, ProductId};

use crate::{CatalogStore, CategoryTile, Collection, Product, ProductCategory, Testimonial};

/// Build the storefront catalog from its static authoring data.
pub fn seed() -> CatalogResult<CatalogStore> {
    let products = vec![
        Product::new("1", "Pijama Silk Rosa", 89_000, "assets/product-1.jpg", Some(ProductCategory::Pajamas)),
        Product::new("2", "Conjunto Satín Crema", 95_000, "assets/product-2.jpg", Some(ProductCategory::Sets)),
        Product::new("3", "Set de Accesorios", 45_000, "assets/product-3.jpg", Some(ProductCategory::Accessories)),
        Product::new("4", "Bata Elegante Champagne", 120_000, "assets/product-4.jpg", Some(ProductCategory::Pajamas)),
        Product::new("5", "Pijama Clásica Rosa", 85_000, "assets/product-1.jpg", Some(ProductCategory::Pajamas)),
        Product::new("6", "Conjunto Premium", 110_000, "assets/product-2.jpg", Some(ProductCategory::Sets)),
        Product::new("7", "Accesorios Deluxe", 55_000, "assets/product-3.jpg", Some(ProductCategory::Accessories)),
        Product::new("8", "Bata de Lujo", 135_000, "assets/product-4.jpg", Some(ProductCategory::Pajamas)),
    ];

    let categories = vec![
        CategoryTile::new(
            "Pijamas",
            "assets/category-pajamas.jpg",
            "/tienda",
            "Suaves, elegantes y cómodas",
        ),
        CategoryTile::new(
            "Accesorios",
            "assets/category-accessories.jpg",
            "/tienda",
            "Complementos perfectos para tu rutina",
        ),
        CategoryTile::new(
            "Sets Completos",
            "assets/product-2.jpg",
            "/tienda",
            "Conjuntos coordinados con estilo",
        ),
        CategoryTile::new(
            "Ediciones Limitadas",
            "assets/product-4.jpg",
            "/colecciones",
            "Piezas exclusivas y únicas",
        ),
    ];

    let collections = vec![
        Collection::new(
            "Colección Primavera",
            "Piezas frescas y delicadas para la nueva temporada",
            vec![ProductId::new("1"), ProductId::new("2")],
        ),
        Collection::new(
            "Edición Limitada Luxury",
            "Exclusivas piezas de alta gama",
            vec![ProductId::new("4"), ProductId::new("6")],
        ),
    ];

    let testimonials = vec![
        Testimonial::new(
            "María González",
            "assets/testimonial-1.jpg",
            "La mejor compra que he hecho. La calidad es excepcional y el confort incomparable.",
            5,
        )?,
        Testimonial::new(
            "Laura Martínez",
            "assets/testimonial-2.jpg",
            "Me encanta la elegancia y suavidad de cada prenda. Definitivamente volveré a comprar.",
            5,
        )?,
        Testimonial::new(
            "Ana Rodríguez",
            "assets/testimonial-3.jpg",
            "Aluna ha transformado mis noches. Son piezas hermosas y muy cómodas.",
            5,
        )?,
    ];

    CatalogStore::new(products, categories, collections, testimonials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_eight_products_with_unique_ids() {
        let store = seed().unwrap();
        assert_eq!(store.products().len(), 8);

        let mut ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn seed_catalog_covers_every_product_category() {
        let store = seed().unwrap();
        for category in ProductCategory::ALL {
            assert!(
                store
                    .products()
                    .iter()
                    .any(|p| p.category == Some(category)),
                "no product tagged {category:?}"
            );
        }
    }

    #[test]
    fn seed_categories_are_four_tiles_with_unique_titles() {
        let store = seed().unwrap();
        assert_eq!(store.categories().len(), 4);

        let mut titles: Vec<&str> = store.categories().iter().map(|c| c.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }

    #[test]
    fn seed_collections_resolve_fully() {
        let store = seed().unwrap();
        assert_eq!(store.collections().len(), 2);

        let primavera = &store.collections()[0];
        let ids: Vec<&str> = store
            .collection_products(primavera)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);

        let luxury = &store.collections()[1];
        let ids: Vec<&str> = store
            .collection_products(luxury)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["4", "6"]);
    }

    #[test]
    fn seed_testimonials_carry_valid_ratings() {
        let store = seed().unwrap();
        assert_eq!(store.testimonials().len(), 3);
        for testimonial in store.testimonials() {
            assert_eq!(testimonial.rating(), 5);
            assert_eq!(testimonial.star_count(), 5);
        }
    }
}
