//! # Tracking API
//!
//! Order status lookup by tracking id. The lookup itself is unimplemented by
//! design: every query gets the canned in-transit message, whatever the log
//! holds.

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/track/{tracking_id}", get(track))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackResponse {
    tracking_id: String,
    message: String,
}

/// GET /api/track/{tracking_id} - canned shipment status.
async fn track(Path(tracking_id): Path<String>) -> Json<TrackResponse> {
    debug!(tracking = %tracking_id, "track order");
    let message = format!("Order {} is currently in transit.", tracking_id);
    Json(TrackResponse {
        tracking_id,
        message,
    })
}
