//! # Checkout API
//!
//! Drives the booking flow over checkout sessions:
//!
//! ```text
//! POST   /api/checkout               open a session for a product
//! GET    /api/checkout/{id}          stage, item, payment block, notes
//! POST   /api/checkout/{id}/details  Details → Payment
//! POST   /api/checkout/{id}/back     Payment → Details (fields kept)
//! POST   /api/checkout/{id}/pay      Payment → Processing (settlement task)
//! DELETE /api/checkout/{id}          abandon; cancels pending settlement
//! GET    /api/checkout/{id}/receipt  the generated document, at Receipt
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use mjg_core::{
    BrandProfile, CartItem, CheckoutStage, CoreError, CustomerDetails, Order, ReceiptDocument,
};

use crate::error::{ApiError, ErrorCode};
use crate::state::{AppState, Session, SettlementPhase};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/checkout", post(open))
        .route("/api/checkout/{id}", get(view).delete(abandon))
        .route("/api/checkout/{id}/details", post(submit_details))
        .route("/api/checkout/{id}/back", post(back))
        .route("/api/checkout/{id}/pay", post(pay))
        .route("/api/checkout/{id}/receipt", get(receipt))
}

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenRequest {
    product_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StageResponse {
    session_id: Uuid,
    stage: CheckoutStage,
}

/// The manual bank-transfer block shown at the payment step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentInstructions {
    bank_name: String,
    account_number: String,
    sort_code: String,
    /// Transfer reference the customer quotes (`DRK-001-PAY`).
    reference: String,
    /// Brand-formatted amount to pay (`₦1,500`).
    total: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    session_id: Uuid,
    stage: CheckoutStage,
    item: CartItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<CustomerDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment: Option<PaymentInstructions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settlement_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Order>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptResponse {
    file_name: String,
    page_count: usize,
    content: String,
    document: ReceiptDocument,
}

fn session_view(id: Uuid, session: &Session, brand: &BrandProfile) -> SessionView {
    let stage = session.flow.stage();
    let item = session.flow.item().clone();

    let payment = (stage == CheckoutStage::Payment).then(|| PaymentInstructions {
        bank_name: brand.bank.bank_name.clone(),
        account_number: brand.bank.account_number.clone(),
        sort_code: brand.bank.sort_code.clone(),
        reference: brand.payment_reference(&item.product.id),
        total: brand.format_amount(item.line_total()),
    });

    let settlement_note = match session.phase {
        Some(SettlementPhase::Confirming) => Some(brand.confirming_note.clone()),
        Some(SettlementPhase::Settling) => Some(brand.processing_note.clone()),
        _ => None,
    };

    SessionView {
        session_id: id,
        stage,
        item,
        details: session.flow.details().cloned(),
        payment,
        settlement_note,
        order: session.flow.order().cloned(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/checkout - open a session for an in-stock product.
async fn open(
    State(state): State<AppState>,
    Json(request): Json<OpenRequest>,
) -> Result<(StatusCode, Json<StageResponse>), ApiError> {
    let product = state
        .catalog
        .with_catalog(|catalog| catalog.get(&request.product_id).cloned())
        .ok_or_else(|| ApiError::from(CoreError::ProductNotFound(request.product_id.clone())))?;

    let session_id = state.checkout.open(product)?;
    info!(session = %session_id, product = %request.product_id, "booking started");

    Ok((
        StatusCode::CREATED,
        Json(StageResponse {
            session_id,
            stage: CheckoutStage::Details,
        }),
    ))
}

/// GET /api/checkout/{id} - current stage and stage-dependent data.
async fn view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .checkout
        .with_session(id, |session| session_view(id, session, &state.brand))
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Checkout session", &id.to_string()))
}

/// POST /api/checkout/{id}/details - submit the booking form.
async fn submit_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(details): Json<CustomerDetails>,
) -> Result<Json<StageResponse>, ApiError> {
    let stage = state.checkout.submit_details(id, details)?;
    debug!(session = %id, ?stage, "details accepted");
    Ok(Json(StageResponse {
        session_id: id,
        stage,
    }))
}

/// POST /api/checkout/{id}/back - return to the details form, fields kept.
async fn back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StageResponse>, ApiError> {
    let stage = state.checkout.back_to_details(id)?;
    Ok(Json(StageResponse {
        session_id: id,
        stage,
    }))
}

/// POST /api/checkout/{id}/pay - "I have made the transfer".
async fn pay(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<StageResponse>), ApiError> {
    state
        .checkout
        .confirm_payment(id, state.brand.timeline, state.orders.clone())?;
    info!(session = %id, "payment affirmed, settlement started");

    Ok((
        StatusCode::ACCEPTED,
        Json(StageResponse {
            session_id: id,
            stage: CheckoutStage::Processing,
        }),
    ))
}

/// DELETE /api/checkout/{id} - abandon the booking.
async fn abandon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.checkout.abandon(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Checkout session", &id.to_string()))
    }
}

/// GET /api/checkout/{id}/receipt - the downloadable document.
async fn receipt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReceiptResponse>, ApiError> {
    let document = state
        .checkout
        .with_session(id, |session| {
            session
                .flow
                .order()
                .map(|order| ReceiptDocument::generate(order, &state.brand))
        })
        .ok_or_else(|| ApiError::not_found("Checkout session", &id.to_string()))?
        .ok_or_else(|| {
            ApiError::new(
                ErrorCode::BusinessLogic,
                "Receipt is not available until settlement completes",
            )
        })?;

    Ok(Json(ReceiptResponse {
        file_name: document.file_name.clone(),
        page_count: document.page_count(),
        content: document.render_text(),
        document,
    }))
}
