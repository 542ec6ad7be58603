//! # Route Modules
//!
//! One module per resource, each exporting a `router()` merged into the
//! application router here.

pub mod checkout;
pub mod orders;
pub mod products;
pub mod submit_order;
pub mod track;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assembles the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(products::router())
        .merge(orders::router())
        .merge(checkout::router())
        .merge(track::router())
        .merge(submit_order::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
