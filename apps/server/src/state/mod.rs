//! # State Module
//!
//! Application state for the HTTP server, split into focused state types:
//! each handler declares exactly what it needs, and independent stores don't
//! contend on one lock.
//!
//! - `CatalogState` - the product catalog behind `Arc<Mutex<_>>`
//! - `OrderLogState` - the append-only order log behind `Arc<Mutex<_>>`
//! - `CheckoutSessions` - bookings in progress plus their settlement tasks
//! - `AppState` - the bundle axum carries; cloning shares the same stores

mod catalog;
mod checkout;
mod orders;

pub use catalog::CatalogState;
pub use checkout::{CheckoutSessions, Session, SessionError, SettlementPhase};
pub use orders::OrderLogState;

use std::sync::Arc;

use mjg_core::BrandProfile;

/// Everything the handlers need, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub orders: OrderLogState,
    pub checkout: CheckoutSessions,
    pub brand: Arc<BrandProfile>,
}

impl AppState {
    /// Builds application state around a catalog and a brand profile.
    pub fn new(catalog: mjg_core::Catalog, brand: BrandProfile) -> Self {
        AppState {
            catalog: CatalogState::new(catalog),
            orders: OrderLogState::new(),
            checkout: CheckoutSessions::new(),
            brand: Arc::new(brand),
        }
    }
}
