//! # Fabricated Identifiers
//!
//! Random, human-readable references handed to customers: order numbers,
//! tracking ids, and catalog ids for admin-created products.
//!
//! These are short base-36 strings, readable over the phone. They are not
//! guaranteed globally unique; the storefront holds one in-memory session and
//! accepts the (tiny) collision odds.
//!
//! ## Example
//! ```rust
//! use mjg_core::ids;
//!
//! let tracking = ids::tracking_id();
//! assert!(tracking.starts_with("TRK-"));
//! assert_eq!(tracking.len(), 13);
//! ```

use rand::Rng;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random segment of a flow tracking id (`TRK-XXXXXXXXX`).
const TRACKING_LEN: usize = 9;

/// Length of an admin-created product id.
const PRODUCT_ID_LEN: usize = 9;

/// Uppercase base-36 string of the given length.
pub fn reference(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Order reference: `ORD-` + up to four decimal digits.
pub fn order_id() -> String {
    let mut rng = rand::thread_rng();
    format!("ORD-{}", rng.gen_range(0..10_000))
}

/// Customer-facing tracking reference: `TRK-` + nine uppercase base-36 chars.
pub fn tracking_id() -> String {
    format!("TRK-{}", reference(TRACKING_LEN))
}

/// Catalog id for admin-created products: nine lowercase base-36 chars.
pub fn product_id() -> String {
    reference(PRODUCT_ID_LEN).to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================
