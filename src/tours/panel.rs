//! Upcoming-tours panel: fetched once per mount, rendered in one of three states.

use super::ToursApi;
use crate::domain::Tour;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error};

/// The only message a seller ever sees for a failed fetch.
pub const TOURS_LOAD_FAILED: &str = "Failed to load upcoming tours.";

#[derive(Debug, Clone, PartialEq)]
pub enum ToursState {
    Loading,
    Failed(String),
    Ready(Vec<Tour>),
}

impl ToursState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ToursState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ToursState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Tours to render; empty unless ready.
    pub fn tours(&self) -> &[Tour] {
        match self {
            ToursState::Ready(tours) => tours,
            _ => &[],
        }
    }
}

#[derive(Debug)]
struct Slot {
    state: ToursState,
    mounted: bool,
    activated: bool,
}

/// Owns the tours state for one mounted dashboard.
///
/// Clones share the same slot, which is how the fetch worker reports back.
/// Once [`ToursPanel::deactivate`] has run every further write is dropped.
#[derive(Debug, Clone)]
pub struct ToursPanel {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    slot: Mutex<Slot>,
    settled: Condvar,
}

impl Default for ToursPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ToursPanel {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    state: ToursState::Loading,
                    mounted: true,
                    activated: false,
                }),
                settled: Condvar::new(),
            }),
        }
    }

    pub fn state(&self) -> ToursState {
        self.lock().state.clone()
    }

    /// Fetch the seller's tours and settle into `Ready` or `Failed`.
    ///
    /// Blocks the calling thread until `api` answers. The panel never stays
    /// `Loading` once this returns or unwinds.
    pub fn load_tours(&self, api: &dyn ToursApi) {
        self.set(ToursState::Loading);
        let guard = SettleGuard { panel: self };

        let next = match api.get_seller_tours() {
            Ok(resp) => {
                debug!(count = resp.tours.len(), "upcoming tours loaded");
                ToursState::Ready(resp.tours)
            }
            Err(err) => {
                debug!(error = %err, "upcoming tours unavailable");
                ToursState::Failed(TOURS_LOAD_FAILED.to_string())
            }
        };

        self.set(next);
        drop(guard);
    }

    /// Start the fetch on a worker thread. Only the first call per mount
    /// does anything; later calls, or calls after deactivation, return `None`.
    pub fn activate(&self, api: Arc<dyn ToursApi>) -> Option<JoinHandle<()>> {
        {
            let mut slot = self.lock();
            if slot.activated || !slot.mounted {
                return None;
            }
            slot.activated = true;
        }

        let panel = self.clone();
        let spawned = thread::Builder::new()
            .name("tours-fetch".into())
            .spawn(move || panel.load_tours(api.as_ref()));

        match spawned {
            Ok(handle) => Some(handle),
            Err(err) => {
                error!(error = %err, "could not spawn tours fetch");
                self.set(ToursState::Failed(TOURS_LOAD_FAILED.to_string()));
                None
            }
        }
    }

    /// Wait up to `timeout` for the panel to leave `Loading`.
    /// Returns `false` if it is still loading, or was unmounted meanwhile.
    pub fn wait_settled(&self, timeout: Duration) -> bool {
        let slot = self.lock();
        let (slot, _) = self
            .shared
            .settled
            .wait_timeout_while(slot, timeout, |s| s.mounted && s.state.is_loading())
            .unwrap_or_else(PoisonError::into_inner);
        slot.mounted && !slot.state.is_loading()
    }

    /// Unmount. An in-flight fetch may still finish but its result is discarded.
    pub fn deactivate(&self) {
        self.lock().mounted = false;
        self.shared.settled.notify_all();
    }

    fn set(&self, state: ToursState) {
        let mut slot = self.lock();
        if slot.mounted {
            slot.state = state;
            self.shared.settled.notify_all();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.shared.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Settles a still-loading panel as failed, including when the api panics.
struct SettleGuard<'a> {
    panel: &'a ToursPanel,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        let mut slot = self.panel.lock();
        if slot.mounted && slot.state.is_loading() {
            slot.state = ToursState::Failed(TOURS_LOAD_FAILED.to_string());
            self.panel.shared.settled.notify_all();
        }
    }
}
