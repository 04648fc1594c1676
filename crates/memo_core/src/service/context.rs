//! Shared state owner injected into every controller.

use crate::config::FallbackPolicy;
use crate::remote::RemoteStore;
use crate::state::snapshot::{Snapshot, ViewProjector};
use crate::state::AppState;
use std::sync::{Arc, Mutex, MutexGuard};

/// Owns the state tree, the remote store and the view seam.
pub struct AppContext {
    state: Mutex<AppState>,
    store: Arc<dyn RemoteStore>,
    projector: Arc<dyn ViewProjector>,
    policy: FallbackPolicy,
}

impl AppContext {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        projector: Arc<dyn ViewProjector>,
        policy: FallbackPolicy,
    ) -> Self {
        Self {
            state: Mutex::new(AppState::new()),
            store,
            projector,
            policy,
        }
    }

    pub fn store(&self) -> &dyn RemoteStore {
        self.store.as_ref()
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Runs `f` with exclusive access to the state tree.
    ///
    /// Callers must not await inside `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Projects current state and hands it to the view.
    pub fn emit(&self) {
        let snapshot = self.snapshot();
        self.projector.render(&snapshot);
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        // State stays usable after a panicked closure.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
