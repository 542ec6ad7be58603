//! # Checkout Flow
//!
//! The stepwise process that turns a selected item plus customer details
//! into a confirmed order.
//!
//! ## Stages
//! ```text
//!             submit_details           confirm_payment        complete
//!  Details ───────────────────► Payment ──────────────► Processing ──────► Receipt
//!     ▲                            │
//!     └────── back_to_details ─────┘        (fields persist on the way back)
//! ```
//!
//! Transitions return typed errors and leave the stage untouched when their
//! preconditions fail. Payment confirmation is trust-based: the customer
//! affirms a manual transfer and no verification occurs. Timing of the
//! `Processing → Receipt` hop belongs to the application layer; this type
//! only knows the synchronous transition (`complete`), which synthesizes the
//! order. Abandoning the flow at any stage simply drops the value: nothing
//! has been committed until `complete` runs and the caller records the order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{CartItem, CustomerDetails, Order, OrderStatus, Product};
use crate::validation::validate_customer;

// =============================================================================
// Checkout Stage
// =============================================================================

/// The four stages of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStage {
    /// Collecting customer details.
    Details,
    /// Showing the bank-transfer block, waiting for the customer to affirm.
    Payment,
    /// Simulated settlement in progress.
    Processing,
    /// Order recorded; receipt available.
    Receipt,
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// One booking in progress: the selected item, the current stage, and the
/// transient state gathered along the way.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    item: CartItem,
    stage: CheckoutStage,
    details: Option<CustomerDetails>,
    order: Option<Order>,
}

impl CheckoutFlow {
    /// Opens a flow for an in-stock product. Sold-out products cannot enter
    /// checkout at all.
    pub fn new(product: Product) -> CoreResult<Self> {
        if !product.in_stock {
            return Err(CoreError::OutOfStock { name: product.name });
        }
        Ok(CheckoutFlow {
            item: CartItem::single(product),
            stage: CheckoutStage::Details,
            details: None,
            order: None,
        })
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The item being booked.
    pub fn item(&self) -> &CartItem {
        &self.item
    }

    /// Details submitted so far, if any (they persist across back-navigation).
    pub fn details(&self) -> Option<&CustomerDetails> {
        self.details.as_ref()
    }

    /// The synthesized order, present once the flow reaches `Receipt`.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// `Details → Payment`.
    ///
    /// Preconditions: the flow is at `Details`, the details variant matches
    /// the item's category, and every field of that variant is non-blank.
    /// On failure the stage (and any previously accepted details) are
    /// unchanged.
    pub fn submit_details(&mut self, details: CustomerDetails) -> CoreResult<()> {
        if self.stage != CheckoutStage::Details {
            return Err(CoreError::StageMismatch {
                operation: "submit details",
                stage: self.stage,
            });
        }

        let expected = self.item.product.category;
        if details.category() != expected {
            return Err(CoreError::CategoryMismatch {
                expected,
                submitted: details.category(),
            });
        }

        validate_customer(&details)?;

        self.details = Some(details);
        self.stage = CheckoutStage::Payment;
        Ok(())
    }

    /// `Payment → Details`, discarding nothing: the accepted fields stay in
    /// place for editing.
    pub fn back_to_details(&mut self) -> CoreResult<()> {
        if self.stage != CheckoutStage::Payment {
            return Err(CoreError::StageMismatch {
                operation: "go back to details",
                stage: self.stage,
            });
        }
        self.stage = CheckoutStage::Details;
        Ok(())
    }

    /// `Payment → Processing`: the customer affirms "I have made the
    /// transfer". Trust-based; no verification occurs.
    pub fn confirm_payment(&mut self) -> CoreResult<()> {
        if self.stage != CheckoutStage::Payment {
            return Err(CoreError::StageMismatch {
                operation: "confirm payment",
                stage: self.stage,
            });
        }
        self.stage = CheckoutStage::Processing;
        Ok(())
    }

    /// `Processing → Receipt`: synthesizes the order with the supplied
    /// references and timestamp, stamped `Paid`.
    ///
    /// The caller owns recording the returned order in the order log.
    pub fn complete(
        &mut self,
        order_id: String,
        tracking_id: String,
        now: DateTime<Utc>,
    ) -> CoreResult<&Order> {
        if self.stage != CheckoutStage::Processing {
            return Err(CoreError::StageMismatch {
                operation: "complete settlement",
                stage: self.stage,
            });
        }

        let customer = self
            .details
            .clone()
            .expect("details were accepted before payment");

        let order = Order {
            id: order_id,
            total: self.item.line_total(),
            items: vec![self.item.clone()],
            customer,
            status: OrderStatus::Paid,
            date: now,
            tracking_id,
        };

        self.order = Some(order);
        self.stage = CheckoutStage::Receipt;
        Ok(self.order.as_ref().expect("just set"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Category;

    fn drink(price: i64) -> Product {
        Product {
            id: "drk-001".to_string(),
            name: "Coca-Cola 50cl".to_string(),
            category: Category::Drink,
            price: Money::from_units(price),
            description: String::new(),
            image: String::new(),
            details: Vec::new(),
            in_stock: true,
        }
    }

    fn delivery(name: &str, phone: &str, address: &str) -> CustomerDetails {
        CustomerDetails::Delivery {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn test_out_of_stock_cannot_enter_checkout() {
        let mut product = drink(1500);
        product.in_stock = false;
        assert!(matches!(
            CheckoutFlow::new(product),
            Err(CoreError::OutOfStock { .. })
        ));
    }

    #[test]
    fn test_missing_required_field_blocks_transition() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();

        let err = flow
            .submit_details(delivery("Ada", "", "12 Lagos Rd"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(flow.stage(), CheckoutStage::Details);
        assert!(flow.details().is_none());
    }

    #[test]
    fn test_category_mismatch_blocks_transition() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();

        let charter = CustomerDetails::Charter {
            organization: "Acme".to_string(),
            phone: "080".to_string(),
            email: "a@b.c".to_string(),
            address: "x".to_string(),
            from_destination: "Lagos".to_string(),
            to_destination: "Ibadan".to_string(),
        };
        let err = flow.submit_details(charter).unwrap_err();
        assert!(matches!(err, CoreError::CategoryMismatch { .. }));
        assert_eq!(flow.stage(), CheckoutStage::Details);
    }

    #[test]
    fn test_back_navigation_keeps_fields() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();
        flow.submit_details(delivery("Ada", "0800000000", "12 Lagos Rd"))
            .unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Payment);

        flow.back_to_details().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Details);
        assert_eq!(
            flow.details().map(|d| d.bill_to_name()),
            Some("Ada")
        );
    }

    #[test]
    fn test_transitions_enforce_stage_order() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();

        // Cannot pay or settle from Details.
        assert!(matches!(
            flow.confirm_payment(),
            Err(CoreError::StageMismatch { .. })
        ));
        assert!(matches!(
            flow.complete("ORD-1".into(), "TRK-AAAAAAAAA".into(), Utc::now()),
            Err(CoreError::StageMismatch { .. })
        ));

        flow.submit_details(delivery("Ada", "0800000000", "12 Lagos Rd"))
            .unwrap();

        // Cannot resubmit details from Payment.
        assert!(matches!(
            flow.submit_details(delivery("Ada", "0800000000", "12 Lagos Rd")),
            Err(CoreError::StageMismatch { .. })
        ));
    }

    #[test]
    fn test_completed_flow_yields_single_item_order() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();
        flow.submit_details(delivery("Bisi", "0801", "1 First Ave"))
            .unwrap();
        // The customer edits their details before paying.
        flow.back_to_details().unwrap();
        let last = delivery("Ada", "0800000000", "12 Lagos Rd");
        flow.submit_details(last.clone()).unwrap();
        flow.confirm_payment().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Processing);

        let now = Utc::now();
        let order = flow
            .complete("ORD-42".to_string(), "TRK-ZZ9AB12CD".to_string(), now)
            .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total, Money::from_units(1500));
        assert_eq!(order.customer, last);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.date, now);
        assert_eq!(flow.stage(), CheckoutStage::Receipt);
    }

    #[test]
    fn test_booking_scenario_tracking_id_shape() {
        let mut flow = CheckoutFlow::new(drink(1500)).unwrap();
        flow.submit_details(delivery("Ada", "0800000000", "12 Lagos Rd"))
            .unwrap();
        flow.confirm_payment().unwrap();

        let tracking = crate::ids::tracking_id();
        let order = flow
            .complete(crate::ids::order_id(), tracking.clone(), Utc::now())
            .unwrap();

        assert_eq!(order.total, Money::from_units(1500));
        assert_eq!(order.status, OrderStatus::Paid);
        let suffix = order.tracking_id.strip_prefix("TRK-").expect("prefix");
        assert!(suffix.len() >= 8);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
