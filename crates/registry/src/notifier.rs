//! Debounced fan-out of registry change events.
//!
//! Registry writes arrive in bursts (a hot-reload cycle re-executes many
//! registration call sites), so listeners are notified once per quiescent
//! period with the union of changed keys rather than once per write. The
//! notifier is an explicit state machine driven by caller-supplied instants:
//! idle until a change is recorded, then pending with a trailing-edge deadline
//! that every further change pushes back. The event loop polls [`pump`] each
//! tick; tests pass synthetic instants instead of sleeping.
//!
//! [`pump`]: ChangeNotifier::pump

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexSet;
use tracing::{debug, warn};

/// How long writes must stay quiet before a batch is delivered.
pub const QUIESCENCE_WINDOW: Duration = Duration::from_millis(250);

/// Receiver of batched change notifications.
pub trait ChangeListener: Send + Sync {
    /// Called once per burst with the changed keys in first-seen order,
    /// duplicates removed.
    fn on_items_changed(&self, keys: &[String]);
}

/// Collects keys changed within a mutation burst and delivers exactly one
/// batched callback per quiescent period to each subscribed listener.
pub struct ChangeNotifier {
    listeners: Vec<Arc<dyn ChangeListener>>,
    pending: IndexSet<String>,
    deadline: Option<Instant>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            pending: IndexSet::new(),
            deadline: None,
        }
    }

    /// Subscribe a listener. Identity is by reference ([`Arc::ptr_eq`]);
    /// subscribing the same listener twice is a logged no-op.
    pub fn subscribe(&mut self, listener: Arc<dyn ChangeListener>) {
        if self
            .listeners
            .iter()
            .any(|existing| Arc::ptr_eq(existing, &listener))
        {
            debug!("listener already subscribed; ignoring");
            return;
        }
        self.listeners.push(listener);
    }

    /// Remove a previously subscribed listener; unknown listeners are a
    /// logged no-op.
    pub fn unsubscribe(&mut self, listener: &Arc<dyn ChangeListener>) {
        let before = self.listeners.len();
        self.listeners
            .retain(|existing| !Arc::ptr_eq(existing, listener));
        if self.listeners.len() == before {
            debug!("unsubscribe for unknown listener; ignoring");
        }
    }

    /// Record a changed key and re-arm the quiescence deadline.
    pub fn record_change(&mut self, key: impl Into<String>, now: Instant) {
        self.pending.insert(key.into());
        self.deadline = Some(now + QUIESCENCE_WINDOW);
    }

    /// Whether a batch is waiting for its quiescence window to elapse.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deadline of the pending batch, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Deliver the pending batch if its window has elapsed.
    ///
    /// The pending set is snapshotted and cleared before any listener runs, so
    /// writes made from within a callback open a fresh batch. A panicking
    /// listener is isolated and logged; remaining listeners still run.
    /// Returns `true` when a batch was delivered.
    pub fn pump(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let keys: Vec<String> = self.pending.drain(..).collect();
        self.deadline = None;

        for listener in &self.listeners {
            let delivery =
                panic::catch_unwind(AssertUnwindSafe(|| listener.on_items_changed(&keys)));
            if delivery.is_err() {
                warn!("change listener panicked during notification; continuing with remaining listeners");
            }
        }
        true
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
