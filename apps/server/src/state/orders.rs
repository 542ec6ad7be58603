//! # Order Log State
//!
//! Shared ownership of the append-only order log. Written by the settlement
//! task, read by the admin view.

use std::sync::{Arc, Mutex};

use mjg_core::OrderLog;

/// Shared order log.
#[derive(Debug, Clone, Default)]
pub struct OrderLogState {
    log: Arc<Mutex<OrderLog>>,
}

impl OrderLogState {
    /// Creates an empty shared log.
    pub fn new() -> Self {
        OrderLogState {
            log: Arc::new(Mutex::new(OrderLog::new())),
        }
    }

    /// Executes a function with read access to the log.
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderLog) -> R,
    {
        let log = self.log.lock().expect("order log mutex poisoned");
        f(&log)
    }

    /// Executes a function with write access to the log.
    pub fn with_log_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderLog) -> R,
    {
        let mut log = self.log.lock().expect("order log mutex poisoned");
        f(&mut log)
    }
}
