//! # Catalog Store
//!
//! Insertion-ordered product list with defined mutators. Products are never
//! deleted; the only mutation after creation is the stock toggle.
//!
//! Single-threaded mutation model: the application wraps the store in its
//! own synchronization, so this type stays a plain struct.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Category, Product};
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Catalog
// =============================================================================

/// The set of bookable products and their stock state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Appends a product after validating its required fields.
    ///
    /// On invalid input (blank name, non-positive price) the store is left
    /// untouched and the error reports the offending field.
    pub fn add(&mut self, product: Product) -> Result<&Product, ValidationError> {
        validate_product_name(&product.name)?;
        validate_price(product.price)?;

        self.products.push(product);
        Ok(self.products.last().expect("push succeeded"))
    }

    /// Flips `in_stock` on the matching product.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn toggle_stock(&mut self, id: &str) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.in_stock = !product.in_stock;
                true
            }
            None => false,
        }
    }

    /// Looks a product up by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products of one category, in insertion order.
    pub fn list_by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// All products, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// The demo catalog the storefront boots with: the soft-drinks mart and the
/// vehicle charter fleet.
pub fn seed() -> Catalog {
    let mut catalog = Catalog::new();

    let entries = [
        (
            "drk-001",
            "Coca-Cola 50cl",
            Category::Drink,
            1500,
            "Ice-cold classic cola in a glass bottle.",
            "https://picsum.photos/400/600?random=21",
            &["50cl", "Chilled", "Glass bottle"][..],
        ),
        (
            "drk-002",
            "Fanta Orange 50cl",
            Category::Drink,
            1200,
            "Bright orange sparkle, served cold.",
            "https://picsum.photos/400/600?random=22",
            &["50cl", "Chilled"][..],
        ),
        (
            "drk-003",
            "Schweppes Chapman",
            Category::Drink,
            2000,
            "The classic chapman blend, ready to pour.",
            "https://picsum.photos/400/600?random=23",
            &["33cl", "Mocktail blend"][..],
        ),
        (
            "drk-004",
            "Eva Premium Water 75cl",
            Category::Drink,
            800,
            "Still table water for the road.",
            "https://picsum.photos/400/600?random=24",
            &["75cl", "Still"][..],
        ),
        (
            "veh-001",
            "Mercedes-Benz S-Class",
            Category::Vehicle,
            350_000,
            "Chauffeured executive saloon for city runs and airport pickups.",
            "https://picsum.photos/400/600?random=31",
            &["Chauffeur included", "Full AC", "4 seats"][..],
        ),
        (
            "veh-002",
            "Toyota Land Cruiser Prado",
            Category::Vehicle,
            250_000,
            "Rugged SUV comfort for long hauls and rough roads.",
            "https://picsum.photos/400/600?random=32",
            &["SUV", "Chauffeur included", "Off-road ready"][..],
        ),
        (
            "veh-003",
            "Lexus RX 350",
            Category::Vehicle,
            200_000,
            "Quiet luxury crossover for day charters.",
            "https://picsum.photos/400/600?random=33",
            &["SUV", "Leather interior"][..],
        ),
    ];

    for (id, name, category, price, description, image, details) in entries {
        catalog
            .add(Product {
                id: id.to_string(),
                name: name.to_string(),
                category,
                price: Money::from_units(price),
                description: description.to_string(),
                image: image.to_string(),
                details: details.iter().map(|d| d.to_string()).collect(),
                in_stock: true,
            })
            .expect("seed products are valid");
    }

    catalog
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: Category, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category,
            price: Money::from_units(price),
            description: String::new(),
            image: String::new(),
            details: Vec::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_toggle_stock_twice_restores_original() {
        let mut catalog = seed();
        for id in catalog
            .iter()
            .map(|p| p.id.clone())
            .collect::<Vec<_>>()
        {
            let before = catalog.get(&id).unwrap().in_stock;
            assert!(catalog.toggle_stock(&id));
            assert_eq!(catalog.get(&id).unwrap().in_stock, !before);
            assert!(catalog.toggle_stock(&id));
            assert_eq!(catalog.get(&id).unwrap().in_stock, before);
        }
    }

    #[test]
    fn test_toggle_stock_unknown_id_is_noop() {
        let mut catalog = seed();
        let snapshot: Vec<bool> = catalog.iter().map(|p| p.in_stock).collect();
        assert!(!catalog.toggle_stock("missing"));
        let after: Vec<bool> = catalog.iter().map(|p| p.in_stock).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn test_list_by_category_filters_in_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.add(product("a", "A", Category::Drink, 100)).unwrap();
        catalog.add(product("b", "B", Category::Vehicle, 200)).unwrap();
        catalog.add(product("c", "C", Category::Drink, 300)).unwrap();

        let drinks: Vec<&str> = catalog
            .list_by_category(Category::Drink)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(drinks, vec!["a", "c"]);

        let vehicles: Vec<&str> = catalog
            .list_by_category(Category::Vehicle)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(vehicles, vec!["b"]);
    }

    #[test]
    fn test_add_rejects_blank_name_without_mutating() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add(product("a", "   ", Category::Drink, 100))
            .unwrap_err();
        assert_eq!(err.to_string(), "name is required");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_price() {
        let mut catalog = Catalog::new();
        assert!(catalog.add(product("a", "A", Category::Drink, 0)).is_err());
        assert!(catalog.add(product("a", "A", Category::Drink, -10)).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_seed_has_both_categories_in_stock() {
        let catalog = seed();
        assert!(catalog.list_by_category(Category::Drink).count() >= 2);
        assert!(catalog.list_by_category(Category::Vehicle).count() >= 2);
        assert!(catalog.iter().all(|p| p.in_stock));
    }
}
