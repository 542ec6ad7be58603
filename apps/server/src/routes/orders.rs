//! # Order API
//!
//! Read-only admin view over the order log. Orders are immutable once
//! recorded, so there is nothing to mutate here.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use mjg_core::Order;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/orders", get(list))
}

/// GET /api/orders - completed bookings, most recent first.
async fn list(State(state): State<AppState>) -> Json<Vec<Order>> {
    debug!("list orders");
    let orders = state.orders.with_log(|log| log.iter().cloned().collect());
    Json(orders)
}
