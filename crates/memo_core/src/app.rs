//! Application facade wiring controllers to one shared context.
//!
//! # Responsibility
//! - Build the context from a store, a projector and a fallback policy.
//! - Hand out the session, navigation and memo controllers.
//!
//! # See also
//! - `service::context::AppContext`

use crate::config::{AppConfig, FallbackPolicy};
use crate::remote::{HttpRemoteStore, RemoteResult, RemoteStore};
use crate::service::context::AppContext;
use crate::service::memo_collection::MemoCollectionController;
use crate::service::navigation::NavigationController;
use crate::service::session::SessionController;
use crate::state::snapshot::{Snapshot, ViewProjector};
use std::sync::Arc;

pub struct MemoApp {
    ctx: Arc<AppContext>,
    session: SessionController,
    navigation: NavigationController,
    memos: MemoCollectionController,
}

impl MemoApp {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        projector: Arc<dyn ViewProjector>,
        policy: FallbackPolicy,
    ) -> Self {
        let ctx = Arc::new(AppContext::new(store, projector, policy));
        let session = SessionController::new(Arc::clone(&ctx));
        let navigation = NavigationController::new(Arc::clone(&ctx));
        let memos = MemoCollectionController::new(Arc::clone(&ctx), navigation.clone());
        Self {
            ctx,
            session,
            navigation,
            memos,
        }
    }

    /// Builds an app talking to the configured HTTP endpoint.
    pub fn from_config(
        config: &AppConfig,
        projector: Arc<dyn ViewProjector>,
    ) -> RemoteResult<Self> {
        let store = HttpRemoteStore::from_config(config)?;
        Ok(Self::new(
            Arc::new(store),
            projector,
            config.fallback_policy,
        ))
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn memos(&self) -> &MemoCollectionController {
        &self.memos
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.ctx.policy()
    }

    /// Current state without emitting to the projector.
    pub fn snapshot(&self) -> Snapshot {
        self.ctx.snapshot()
    }
}
