//! # Order Log
//!
//! Append-only record of completed bookings, newest first. Orders are
//! immutable once recorded; the log never removes or reorders entries.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::Order;

// =============================================================================
// Order Log
// =============================================================================

/// The append-only, most-recent-first order record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLog {
    orders: VecDeque<Order>,
}

impl OrderLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        OrderLog {
            orders: VecDeque::new(),
        }
    }

    /// Records a completed order at the front of the log.
    pub fn record(&mut self, order: Order) -> &Order {
        self.orders.push_front(order);
        self.orders.front().expect("just pushed")
    }

    /// Orders, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Looks an order up by its tracking reference.
    pub fn find_by_tracking_id(&self, tracking_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.tracking_id == tracking_id)
    }

    /// Number of recorded orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether any order has been recorded.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
