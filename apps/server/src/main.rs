//! # Server Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Seed the catalog (unless `MJG_SEED=false`)
//! 4. Bind and serve the application router

use std::net::SocketAddr;

use tracing::{error, info};

use mjg_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    mjg_server::init_tracing();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {}", err);
            std::process::exit(2);
        }
    };

    let addr = SocketAddr::from((config.bind, config.port));
    let app = mjg_server::app(&config);

    info!(%addr, brand = %config.brand.name, "storefront listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("server error");
}
