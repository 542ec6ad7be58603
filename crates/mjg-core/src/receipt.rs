//! # Receipt Generator
//!
//! Pure transform from a completed order (plus the brand profile) to a
//! paginated plain-text document: brand header, bill-to block, details
//! block, itemized lines, total, footer.
//!
//! The field selection in the bill-to and details blocks depends on the
//! order category (drink orders bill a person, vehicle orders bill an
//! organization and show the journey). Currency amounts reproduce the
//! brand's exact formatting (symbol + grouped thousands); dates use the
//! brand's short-date format.

use serde::Serialize;

use crate::brand::BrandProfile;
use crate::types::{Category, CustomerDetails, Order};

// =============================================================================
// Layout Constants
// =============================================================================

/// Character width of the rendered receipt column.
const PAGE_WIDTH: usize = 42;

/// Item lines per page.
const ITEMS_PER_PAGE: usize = 12;

// =============================================================================
// Receipt Document
// =============================================================================

/// One itemized line on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub description: String,
    pub quantity: u32,
    /// Line amount, already brand-formatted (`₦1,500`).
    pub amount: String,
}

/// A receipt ready for rendering or download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDocument {
    /// Brand block at the top of every page.
    pub brand_name: String,

    /// Document title.
    pub title: String,

    /// Order reference line (`Ref: ORD-42`).
    pub reference: String,

    /// Bill-to block: name/organization and contact lines.
    pub bill_to: Vec<String>,

    /// Details block: date, tracking id, journey endpoints for charters.
    pub details: Vec<String>,

    /// Item lines, chunked into pages.
    pub pages: Vec<Vec<ReceiptLine>>,

    /// Brand-formatted grand total (`₦1,500`).
    pub total: String,

    /// Footer lines (thanks + website).
    pub footer: Vec<String>,

    /// Suggested download name, derived from the tracking id.
    pub file_name: String,
}

impl ReceiptDocument {
    /// Builds the document for a completed order.
    pub fn generate(order: &Order, brand: &BrandProfile) -> Self {
        let bill_to = match &order.customer {
            CustomerDetails::Delivery {
                name,
                phone,
                address,
            } => vec![name.clone(), phone.clone(), address.clone()],
            CustomerDetails::Charter {
                organization,
                email,
                phone,
                address,
                ..
            } => vec![
                organization.clone(),
                email.clone(),
                phone.clone(),
                address.clone(),
            ],
        };

        let mut details = vec![
            format!("Date: {}", brand.format_date(order.date)),
            format!("Tracking ID: {}", order.tracking_id),
        ];
        if order.category() == Category::Vehicle {
            if let Some((from, to)) = order.customer.journey() {
                details.push(format!("From: {}", from));
                details.push(format!("To: {}", to));
            }
        }

        let lines: Vec<ReceiptLine> = order
            .items
            .iter()
            .map(|item| ReceiptLine {
                description: item.product.name.clone(),
                quantity: item.quantity,
                amount: brand.format_amount(item.line_total()),
            })
            .collect();

        let pages = lines
            .chunks(ITEMS_PER_PAGE)
            .map(|chunk| chunk.to_vec())
            .collect();

        ReceiptDocument {
            brand_name: brand.name.clone(),
            title: "OFFICIAL RECEIPT".to_string(),
            reference: format!("Ref: {}", order.id.to_uppercase()),
            bill_to,
            details,
            pages,
            total: brand.format_amount(order.total),
            footer: vec![brand.receipt_thanks.clone(), brand.website.clone()],
            file_name: format!("Receipt-{}.txt", order.tracking_id),
        }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Renders the document as plain text, pages separated by form feeds.
    ///
    /// Every page repeats the brand header and the item-table header; the
    /// first page carries the bill-to and details blocks, the last carries
    /// the total and footer.
    pub fn render_text(&self) -> String {
        let last = self.pages.len().saturating_sub(1);
        let mut rendered: Vec<String> = Vec::with_capacity(self.pages.len());

        for (index, page) in self.pages.iter().enumerate() {
            let mut out = String::new();

            out.push_str(&self.brand_name);
            out.push('\n');
            out.push_str(&rule('='));
            out.push('\n');
            out.push_str(&two_col(&self.title, &self.reference));
            out.push('\n');
            out.push_str(&rule('-'));
            out.push('\n');

            if index == 0 {
                out.push_str("BILL TO:\n");
                for line in &self.bill_to {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str("DETAILS:\n");
                for line in &self.details {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&rule('-'));
                out.push('\n');
            }

            out.push_str(&item_row("Description", "Qty", "Amount"));
            out.push('\n');
            for line in page {
                out.push_str(&item_row(
                    &line.description,
                    &line.quantity.to_string(),
                    &line.amount,
                ));
                out.push('\n');
            }

            if index == last {
                out.push_str(&rule('-'));
                out.push('\n');
                out.push_str(&right_align(&format!("TOTAL: {}", self.total)));
                out.push('\n');
                for line in &self.footer {
                    out.push_str(line);
                    out.push('\n');
                }
            }

            rendered.push(out);
        }

        rendered.join("\u{0C}")
    }
}

// =============================================================================
// Text Layout Helpers
// =============================================================================

fn rule(ch: char) -> String {
    ch.to_string().repeat(PAGE_WIDTH)
}

/// Width in characters, not bytes (currency symbols are multi-byte).
fn width_of(s: &str) -> usize {
    s.chars().count()
}

/// Left and right text on one line, padded apart to the page width.
fn two_col(left: &str, right: &str) -> String {
    let used = width_of(left) + width_of(right);
    let gap = PAGE_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Description / quantity / amount columns.
fn item_row(description: &str, quantity: &str, amount: &str) -> String {
    const DESC_WIDTH: usize = 22;
    const QTY_WIDTH: usize = 5;
    const AMOUNT_WIDTH: usize = PAGE_WIDTH - DESC_WIDTH - QTY_WIDTH;

    let desc: String = if width_of(description) > DESC_WIDTH {
        description.chars().take(DESC_WIDTH).collect()
    } else {
        let pad = DESC_WIDTH - width_of(description);
        format!("{}{}", description, " ".repeat(pad))
    };
    let qty = pad_left(quantity, QTY_WIDTH);
    let amount = pad_left(amount, AMOUNT_WIDTH);
    format!("{}{}{}", desc, qty, amount)
}

fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(width_of(s));
    format!("{}{}", " ".repeat(pad), s)
}

fn right_align(s: &str) -> String {
    pad_left(s, PAGE_WIDTH)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{CartItem, CustomerDetails, OrderStatus, Product};
    use chrono::TimeZone;

    fn product(name: &str, category: Category, price: i64) -> Product {
        Product {
            id: "drk-001".to_string(),
            name: name.to_string(),
            category,
            price: Money::from_units(price),
            description: String::new(),
            image: String::new(),
            details: Vec::new(),
            in_stock: true,
        }
    }

    fn drink_order() -> Order {
        Order {
            id: "ORD-42".to_string(),
            items: vec![CartItem::single(product(
                "Coca-Cola 50cl",
                Category::Drink,
                1500,
            ))],
            total: Money::from_units(1500),
            customer: CustomerDetails::Delivery {
                name: "Ada".to_string(),
                phone: "0800000000".to_string(),
                address: "12 Lagos Rd".to_string(),
            },
            status: OrderStatus::Paid,
            date: chrono::Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap(),
            tracking_id: "TRK-ZZ9AB12CD".to_string(),
        }
    }

    fn charter_order() -> Order {
        Order {
            id: "ORD-77".to_string(),
            items: vec![CartItem::single(product(
                "Mercedes-Benz S-Class",
                Category::Vehicle,
                350_000,
            ))],
            total: Money::from_units(350_000),
            customer: CustomerDetails::Charter {
                organization: "Acme Logistics".to_string(),
                phone: "08012345678".to_string(),
                email: "ops@acme.test".to_string(),
                address: "14 Marina Rd".to_string(),
                from_destination: "Lagos".to_string(),
                to_destination: "Ibadan".to_string(),
            },
            status: OrderStatus::Paid,
            date: chrono::Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap(),
            tracking_id: "TRK-AB12CD34E".to_string(),
        }
    }

    #[test]
    fn test_drink_receipt_blocks() {
        let doc = ReceiptDocument::generate(&drink_order(), &BrandProfile::mjgglobal());

        assert_eq!(doc.brand_name, "MJGGLOBAL");
        assert_eq!(doc.reference, "Ref: ORD-42");
        assert_eq!(doc.bill_to, vec!["Ada", "0800000000", "12 Lagos Rd"]);
        assert_eq!(
            doc.details,
            vec!["Date: 09/03/2024", "Tracking ID: TRK-ZZ9AB12CD"]
        );
        assert_eq!(doc.total, "₦1,500");
        assert_eq!(doc.file_name, "Receipt-TRK-ZZ9AB12CD.txt");
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_charter_receipt_bills_organization_and_shows_journey() {
        let doc = ReceiptDocument::generate(&charter_order(), &BrandProfile::mjgglobal());

        assert_eq!(
            doc.bill_to,
            vec![
                "Acme Logistics",
                "ops@acme.test",
                "08012345678",
                "14 Marina Rd"
            ]
        );
        assert!(doc.details.contains(&"From: Lagos".to_string()));
        assert!(doc.details.contains(&"To: Ibadan".to_string()));
        assert_eq!(doc.total, "₦350,000");
    }

    #[test]
    fn test_rendered_text_layout() {
        let doc = ReceiptDocument::generate(&drink_order(), &BrandProfile::mjgglobal());
        let text = doc.render_text();

        assert!(text.starts_with("MJGGLOBAL\n"));
        assert!(text.contains("OFFICIAL RECEIPT"));
        assert!(text.contains("Ref: ORD-42"));
        assert!(text.contains("BILL TO:"));
        assert!(text.contains("Coca-Cola 50cl"));
        assert!(text.contains("₦1,500"));
        assert!(text.contains("TOTAL: ₦1,500"));
        assert!(text.contains("Thank you for choosing MJGGLOBAL."));
        assert!(text.contains("mjgglobal.com"));
        assert!(!text.contains('\u{0C}'));
    }

    #[test]
    fn test_brand_formatting_flows_through() {
        let doc = ReceiptDocument::generate(&drink_order(), &BrandProfile::zest_glide());
        assert_eq!(doc.total, "$1,500");
        assert!(doc.details.contains(&"Date: 03/09/2024".to_string()));
    }

    #[test]
    fn test_pagination_chunks_item_lines() {
        let mut order = drink_order();
        let line = order.items[0].clone();
        order.items = std::iter::repeat(line).take(30).collect();

        let doc = ReceiptDocument::generate(&order, &BrandProfile::mjgglobal());
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.pages[0].len(), 12);
        assert_eq!(doc.pages[2].len(), 6);

        let text = doc.render_text();
        // Two form feeds separate three pages; total only on the last.
        assert_eq!(text.matches('\u{0C}').count(), 2);
        assert_eq!(text.matches("TOTAL:").count(), 1);
        assert_eq!(text.matches("BILL TO:").count(), 1);
    }

    #[test]
    fn test_item_row_alignment() {
        let row = item_row("Coca-Cola 50cl", "1", "₦1,500");
        assert_eq!(width_of(&row), PAGE_WIDTH);
        assert!(row.ends_with("₦1,500"));
    }
}
