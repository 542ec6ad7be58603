//! # mjg-server
//!
//! The HTTP application over mjg-core.
//!
//! ## Module Organization
//! ```text
//! mjg_server/
//! ├── lib.rs          ◄─── Router assembly & tracing init
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── ApiError for handlers
//! ├── state/
//! │   ├── catalog.rs  ◄─── Shared catalog store
//! │   ├── orders.rs   ◄─── Shared order log
//! │   └── checkout.rs ◄─── Sessions + settlement tasks
//! └── routes/
//!     ├── products.rs ◄─── Catalog & admin inventory
//!     ├── orders.rs   ◄─── Admin order list
//!     ├── checkout.rs ◄─── The booking flow
//!     ├── track.rs    ◄─── Canned tracking lookup
//!     └── submit_order.rs ◄─── Standalone submission stub
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use mjg_core::{catalog, Catalog};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Builds the application router for a configuration.
pub fn app(config: &ServerConfig) -> axum::Router {
    let catalog = if config.seed {
        catalog::seed()
    } else {
        Catalog::new()
    };
    let state = AppState::new(catalog, config.brand.clone());
    routes::router(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Default level is `info`; override with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
