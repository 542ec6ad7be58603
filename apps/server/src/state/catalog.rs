//! # Catalog State
//!
//! Shared ownership of the in-memory catalog. Handlers may run concurrently,
//! so the store sits behind `Arc<Mutex<T>>`; every access goes through a
//! short closure holding the lock.

use std::sync::{Arc, Mutex};

use mjg_core::Catalog;

/// Shared catalog store.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Wraps a catalog (seeded or empty) for shared access.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("catalog mutex poisoned");
        f(&mut catalog)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}
