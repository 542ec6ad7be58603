//! # Server Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The brand key selects which `BrandProfile` preset the whole
//! application runs as.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

use mjg_core::BrandProfile;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`MJG_BIND`, default 127.0.0.1).
    pub bind: IpAddr,

    /// HTTP port (`MJG_PORT`, default 8080).
    pub port: u16,

    /// The active brand profile (`MJG_BRAND`: `mjgglobal` | `zest-glide`).
    pub brand: BrandProfile,

    /// Whether to boot with the demo catalog (`MJG_SEED`, default true).
    pub seed: bool,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind = match env::var("MJG_BIND") {
            Ok(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MJG_BIND".to_string()))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = env::var("MJG_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MJG_PORT".to_string()))?;

        let brand_key = env::var("MJG_BRAND").unwrap_or_else(|_| "mjgglobal".to_string());
        let brand = BrandProfile::by_key(&brand_key)
            .ok_or_else(|| ConfigError::UnknownBrand(brand_key))?;

        let seed = env::var("MJG_SEED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(ServerConfig {
            bind,
            port,
            brand,
            seed,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            brand: BrandProfile::mjgglobal(),
            seed: true,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown brand key: {0} (expected mjgglobal or zest-glide)")]
    UnknownBrand(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
