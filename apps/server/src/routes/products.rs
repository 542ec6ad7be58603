//! # Product API
//!
//! Catalog listing plus the admin inventory operations (add, stock toggle).
//! No authentication gate: the storefront is a demo and the admin surface is
//! deliberately open.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, info};

use mjg_core::{ids, Category, Money, Product};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(add))
        .route("/api/products/{id}/stock-toggle", post(toggle_stock))
}

// =============================================================================
// List
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListQuery {
    category: Option<String>,
}

/// GET /api/products[?category=drink|vehicle] - catalog in insertion order.
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    debug!(category = ?query.category, "list products");

    let category = match query.category.as_deref() {
        Some(raw) => Some(
            Category::parse(raw)
                .ok_or_else(|| ApiError::validation(format!("Unknown category: {}", raw)))?,
        ),
        None => None,
    };

    let products = state.catalog.with_catalog(|catalog| match category {
        Some(c) => catalog.list_by_category(c).cloned().collect(),
        None => catalog.iter().cloned().collect(),
    });

    Ok(Json(products))
}

// =============================================================================
// Add
// =============================================================================

/// Admin add form. Name and price are required; the rest defaults the way
/// the storefront's add form does.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddProductRequest {
    name: String,
    category: Category,
    price: i64,
    #[serde(default)]
    description: String,
    #[serde(default = "default_image")]
    image: String,
    #[serde(default)]
    details: Vec<String>,
}

fn default_image() -> String {
    "https://picsum.photos/400/600".to_string()
}

/// POST /api/products - append a product to the catalog.
async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = Product {
        id: ids::product_id(),
        name: request.name,
        category: request.category,
        price: Money::from_units(request.price),
        description: request.description,
        image: request.image,
        details: request.details,
        in_stock: true,
    };

    let added = state
        .catalog
        .with_catalog_mut(|catalog| catalog.add(product).map(|p| p.clone()))?;

    info!(product = %added.id, name = %added.name, "product added");
    Ok((StatusCode::CREATED, Json(added)))
}

// =============================================================================
// Stock Toggle
// =============================================================================

/// POST /api/products/{id}/stock-toggle - flip the in-stock flag.
async fn toggle_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog
        .with_catalog_mut(|catalog| {
            if catalog.toggle_stock(&id) {
                catalog.get(&id).cloned()
            } else {
                None
            }
        })
        .ok_or_else(|| ApiError::not_found("Product", &id))?;

    info!(product = %id, in_stock = product.in_stock, "stock toggled");
    Ok(Json(product))
}
