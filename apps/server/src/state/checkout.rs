//! # Checkout Sessions
//!
//! One entry per booking in progress. Each session owns its `CheckoutFlow`
//! plus a single cancellation token tied to the session lifetime: abandoning
//! the session cancels any pending settlement, so an abandoned flow can never
//! record an order.
//!
//! ## Settlement
//! ```text
//!  pay ──► spawn ──► sleep(confirm) ──► sleep(settle) ──► complete + record
//!                        │                  │
//!                        └── token.cancelled() anywhere ──► exit, no commit
//! ```
//!
//! The settlement task is the only writer of the order log: orders enter the
//! log exactly once, at the end of an uncancelled settlement. No retries; the
//! simulated steps cannot fail.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use mjg_core::brand::SettlementTimeline;
use mjg_core::{ids, CheckoutFlow, CheckoutStage, CoreError, CustomerDetails, Product};

use super::OrderLogState;

// =============================================================================
// Session Types
// =============================================================================

/// Which simulated settlement pause the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementPhase {
    /// First pause: the transfer is being "confirmed".
    Confirming,
    /// Second pause: the booking is being "secured".
    Settling,
    /// Settlement finished; the order is recorded.
    Settled,
}

/// A booking in progress.
#[derive(Debug)]
pub struct Session {
    /// The underlying flow state machine.
    pub flow: CheckoutFlow,

    /// Settlement phase, present once payment was confirmed.
    pub phase: Option<SettlementPhase>,

    /// Cancelled when the session is abandoned.
    cancel: CancellationToken,
}

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Checkout session not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Flow(#[from] CoreError),
}

// =============================================================================
// Checkout Sessions
// =============================================================================

/// Shared map of bookings in progress.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSessions {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl CheckoutSessions {
    /// Creates an empty session map.
    pub fn new() -> Self {
        CheckoutSessions {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Opens a session for an in-stock product.
    pub fn open(&self, product: Product) -> Result<Uuid, SessionError> {
        let flow = CheckoutFlow::new(product)?;
        let id = Uuid::new_v4();

        let mut sessions = self.lock();
        sessions.insert(
            id,
            Session {
                flow,
                phase: None,
                cancel: CancellationToken::new(),
            },
        );
        debug!(session = %id, "checkout session opened");
        Ok(id)
    }

    /// Executes a function with read access to a session.
    pub fn with_session<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&Session) -> R,
    {
        let sessions = self.lock();
        sessions.get(&id).map(f)
    }

    /// Submits customer details: `Details → Payment`.
    pub fn submit_details(
        &self,
        id: Uuid,
        details: CustomerDetails,
    ) -> Result<CheckoutStage, SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.flow.submit_details(details)?;
        Ok(session.flow.stage())
    }

    /// Back-navigation: `Payment → Details`, fields kept.
    pub fn back_to_details(&self, id: Uuid) -> Result<CheckoutStage, SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.flow.back_to_details()?;
        Ok(session.flow.stage())
    }

    /// The customer affirms the transfer: `Payment → Processing`, then one
    /// settlement task runs the timeline and records the order, unless the
    /// session is abandoned first.
    pub fn confirm_payment(
        &self,
        id: Uuid,
        timeline: SettlementTimeline,
        orders: OrderLogState,
    ) -> Result<(), SessionError> {
        let token = {
            let mut sessions = self.lock();
            let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
            session.flow.confirm_payment()?;
            session.phase = Some(if timeline.confirm.is_zero() {
                SettlementPhase::Settling
            } else {
                SettlementPhase::Confirming
            });
            session.cancel.clone()
        };

        let sessions = self.clone();
        tokio::spawn(async move {
            let pauses = async {
                if !timeline.confirm.is_zero() {
                    tokio::time::sleep(timeline.confirm).await;
                    sessions.set_phase(id, SettlementPhase::Settling);
                }
                tokio::time::sleep(timeline.settle).await;
            };

            tokio::select! {
                _ = token.cancelled() => {
                    debug!(session = %id, "settlement cancelled, nothing recorded");
                }
                _ = pauses => {
                    sessions.finish(id, orders);
                }
            }
        });

        Ok(())
    }

    /// Abandons a session: cancels any pending settlement and drops all
    /// transient state. Returns `false` for an unknown id.
    pub fn abandon(&self, id: Uuid) -> bool {
        let mut sessions = self.lock();
        match sessions.remove(&id) {
            Some(session) => {
                session.cancel.cancel();
                debug!(session = %id, "checkout session abandoned");
                true
            }
            None => false,
        }
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // =========================================================================
    // Settlement internals
    // =========================================================================

    fn set_phase(&self, id: Uuid, phase: SettlementPhase) {
        let mut sessions = self.lock();
        if let Some(session) = sessions.get_mut(&id) {
            session.phase = Some(phase);
        }
    }

    /// Completes the flow and records the order. A session abandoned between
    /// the timer firing and this call is simply gone; nothing is committed.
    fn finish(&self, id: Uuid, orders: OrderLogState) {
        let mut sessions = self.lock();
        let Some(session) = sessions.get_mut(&id) else {
            return;
        };

        let order_id = ids::order_id();
        let tracking_id = ids::tracking_id();
        match session.flow.complete(order_id, tracking_id, Utc::now()) {
            Ok(order) => {
                let order = order.clone();
                session.phase = Some(SettlementPhase::Settled);
                info!(
                    session = %id,
                    order = %order.id,
                    tracking = %order.tracking_id,
                    total = %order.total,
                    "order recorded"
                );
                orders.with_log_mut(|log| {
                    log.record(order);
                });
            }
            Err(err) => {
                debug!(session = %id, error = %err, "settlement found session in unexpected stage");
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.sessions.lock().expect("session mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
