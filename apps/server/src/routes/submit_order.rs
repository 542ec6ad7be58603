//! # Order Submission Stub
//!
//! `POST /api/submit-order`: fabricates ids and echoes the input back after a
//! fixed delay. Illustrative only: the booking flow does not call it; orders
//! are synthesized by the settlement task instead. Kept as a standalone
//! handler with the exact observable behavior: 405 for other methods, 400
//! when any of items/customer/total is missing, 200 with the echoed order.

use std::time::Duration;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use tracing::{debug, warn};

use mjg_core::ids;

use crate::state::AppState;

/// Simulated database round-trip.
const SIMULATED_DB_DELAY: Duration = Duration::from_millis(1500);

/// Request body cap; the stub echoes the payload, so keep it modest.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router() -> Router<AppState> {
    // The handler owns the method check so non-POST requests get the stub's
    // own JSON message rather than a bare 405.
    Router::new().route("/api/submit-order", any(submit_order))
}

async fn submit_order(request: Request) -> Response {
    if request.method() != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "message": "Method Not Allowed" })),
        )
            .into_response();
    }

    let body = match read_json_body(request.into_body()).await {
        Ok(body) => body,
        Err(response) => return response,
    };

    let items = body.get("items");
    let customer = body.get("customer");
    let total = body.get("total");
    if is_missing(items) || is_missing(customer) || is_missing(total) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Missing required fields" })),
        )
            .into_response();
    }

    tokio::time::sleep(SIMULATED_DB_DELAY).await;

    let order_id = ids::reference(8);
    let tracking_id = format!("TRK-{}", ids::reference(10));
    debug!(order = %order_id, tracking = %tracking_id, "stub order fabricated");

    let order = json!({
        "id": order_id,
        "items": items,
        "customer": customer,
        "total": total,
        "trackingId": tracking_id,
        "status": "paid",
        "date": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    });

    (StatusCode::OK, Json(json!({ "success": true, "order": order }))).into_response()
}

/// Reads and parses the body. An unreadable body is the stub's one
/// "unexpected failure" and maps to a generic 500; an unparseable one is
/// treated as empty and fails the required-fields check downstream.
async fn read_json_body(body: Body) -> Result<Value, Response> {
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to read submit-order body");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response());
        }
    };

    Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}
