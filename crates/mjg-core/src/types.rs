//! # Domain Types
//!
//! Core domain types for the storefront: products, cart items, customer
//! details, and completed orders.
//!
//! ## Customer details as a tagged union
//! The two storefront verticals collect different booking forms. Rather than
//! one struct of optional fields, `CustomerDetails` is an enum keyed by
//! category: each variant carries exactly the fields its form requires, so a
//! drink order can never hold half-filled charter fields. On the wire the
//! enum is tagged with `"category"` and uses camelCase field names, matching
//! the storefront's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The two storefront verticals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Soft drinks mart.
    Drink,
    /// Vehicle charter.
    Vehicle,
}

impl Category {
    /// The lowercase wire name (`"drink"` / `"vehicle"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Drink => "drink",
            Category::Vehicle => "vehicle",
        }
    }

    /// Parses the lowercase wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "drink" => Some(Category::Drink),
            "vehicle" => Some(Category::Vehicle),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for booking.
///
/// Created by seed data or an admin add; mutated only via the stock toggle;
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier (random base-36 string).
    pub id: String,

    /// Display name shown in the catalog and on receipts.
    pub name: String,

    /// Which vertical the product belongs to.
    pub category: Category,

    /// Price in whole currency units.
    pub price: Money,

    /// Marketing description.
    pub description: String,

    /// Image reference (URL).
    pub image: String,

    /// Ordered spec/ingredient tags.
    pub details: Vec<String>,

    /// Whether the product can currently be booked.
    pub in_stock: bool,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product line in an order.
///
/// The booking flow always books a single selected item, so `quantity` is 1
/// everywhere today; the type still carries it because receipts render
/// quantity and line amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the booked product.
    #[serde(flatten)]
    pub product: Product,

    /// Quantity booked.
    pub quantity: u32,
}

impl CartItem {
    /// Wraps a product as a single-quantity line.
    pub fn single(product: Product) -> Self {
        CartItem {
            product,
            quantity: 1,
        }
    }

    /// Line amount (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Customer Details
// =============================================================================

/// Customer details collected by the booking form, keyed by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CustomerDetails {
    /// Drink orders: home delivery details.
    #[serde(rename = "drink", rename_all = "camelCase")]
    Delivery {
        name: String,
        phone: String,
        address: String,
    },

    /// Vehicle orders: charter details including the journey endpoints.
    #[serde(rename = "vehicle", rename_all = "camelCase")]
    Charter {
        organization: String,
        phone: String,
        email: String,
        address: String,
        from_destination: String,
        to_destination: String,
    },
}

impl CustomerDetails {
    /// The category this variant belongs to.
    pub const fn category(&self) -> Category {
        match self {
            CustomerDetails::Delivery { .. } => Category::Drink,
            CustomerDetails::Charter { .. } => Category::Vehicle,
        }
    }

    /// The name the order is billed to (customer or organization).
    pub fn bill_to_name(&self) -> &str {
        match self {
            CustomerDetails::Delivery { name, .. } => name,
            CustomerDetails::Charter { organization, .. } => organization,
        }
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        match self {
            CustomerDetails::Delivery { phone, .. } => phone,
            CustomerDetails::Charter { phone, .. } => phone,
        }
    }

    /// Delivery or HQ address.
    pub fn address(&self) -> &str {
        match self {
            CustomerDetails::Delivery { address, .. } => address,
            CustomerDetails::Charter { address, .. } => address,
        }
    }

    /// Journey endpoints for charter orders, `None` for drink orders.
    pub fn journey(&self) -> Option<(&str, &str)> {
        match self {
            CustomerDetails::Delivery { .. } => None,
            CustomerDetails::Charter {
                from_destination,
                to_destination,
                ..
            } => Some((from_destination, to_destination)),
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a completed order.
///
/// Only `Paid` is ever produced by the booking flow today; the other states
/// exist for the order record's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivered,
}

// =============================================================================
// Order
// =============================================================================

/// A completed booking.
///
/// Created only at the end of a successful checkout, immutable thereafter.
/// Every item shares one category, and the customer variant matches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order reference (`ORD-…`, not guaranteed globally unique).
    pub id: String,

    /// Booked lines; non-empty, single category.
    pub items: Vec<CartItem>,

    /// Grand total in whole currency units.
    pub total: Money,

    /// The customer the order is billed to.
    pub customer: CustomerDetails,

    /// Lifecycle status; the flow stamps `Paid`.
    pub status: OrderStatus,

    /// When the order was recorded (serialized RFC 3339).
    pub date: DateTime<Utc>,

    /// Opaque tracking reference shown to the customer (`TRK-…`).
    pub tracking_id: String,
}

impl Order {
    /// The category shared by every item on the order.
    pub fn category(&self) -> Category {
        self.items[0].product.category
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_product() -> Product {
        Product {
            id: "abc123xyz".to_string(),
            name: "Schweppes Chapman".to_string(),
            category: Category::Drink,
            price: Money::from_units(1500),
            description: "Classic chapman blend".to_string(),
            image: "https://picsum.photos/400/600".to_string(),
            details: vec!["50cl".to_string(), "Chilled".to_string()],
            in_stock: true,
        }
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::Drink.as_str(), "drink");
        assert_eq!(Category::parse("vehicle"), Some(Category::Vehicle));
        assert_eq!(Category::parse("boat"), None);
    }

    #[test]
    fn test_cart_item_line_total() {
        let mut item = CartItem::single(demo_product());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), Money::from_units(1500));

        item.quantity = 3;
        assert_eq!(item.line_total(), Money::from_units(4500));
    }

    #[test]
    fn test_cart_item_flattens_product_fields() {
        let json = serde_json::to_value(CartItem::single(demo_product())).unwrap();
        assert_eq!(json["name"], "Schweppes Chapman");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_customer_details_tagged_by_category() {
        let details = CustomerDetails::Charter {
            organization: "Acme Logistics".to_string(),
            phone: "08012345678".to_string(),
            email: "ops@acme.test".to_string(),
            address: "14 Marina Rd, Lagos".to_string(),
            from_destination: "Lagos".to_string(),
            to_destination: "Ibadan".to_string(),
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["category"], "vehicle");
        assert_eq!(json["fromDestination"], "Lagos");
        assert_eq!(json["toDestination"], "Ibadan");

        let back: CustomerDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
        assert_eq!(back.category(), Category::Vehicle);
        assert_eq!(back.bill_to_name(), "Acme Logistics");
        assert_eq!(back.journey(), Some(("Lagos", "Ibadan")));
    }

    #[test]
    fn test_delivery_details_have_no_journey() {
        let details = CustomerDetails::Delivery {
            name: "Ada".to_string(),
            phone: "0800000000".to_string(),
            address: "12 Lagos Rd".to_string(),
        };
        assert_eq!(details.category(), Category::Drink);
        assert_eq!(details.journey(), None);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["category"], "drink");
        assert_eq!(json["name"], "Ada");
    }

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(serde_json::to_string(&OrderStatus::Paid).unwrap(), "\"paid\"");
    }
}
