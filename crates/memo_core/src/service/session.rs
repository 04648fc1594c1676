//! Session use-cases: credential input and login.
//!
//! # Responsibility
//! - Gate login on credential validity.
//! - Load the category set and settle the session state.
//!
//! # Invariants
//! - Login starts only from `SignedOut`; an active session never reverts.
//! - Demo policy always ends a started login in `Active`.
//! - Strict policy returns to `SignedOut` when categories cannot be loaded.
//! - The raw credential is never logged.

use super::context::AppContext;
use super::fallback::fallback_categories;
use crate::auth::credential::{is_valid_credential, Credential};
use crate::state::{Session, SessionPhase};
use log::{debug, info, warn};
use std::sync::Arc;

/// Result of one `login` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credential failed validation; nothing changed.
    Rejected,
    /// A login is already pending or the session is active.
    AlreadyStarted,
    /// Session is active. `degraded` marks fixture categories.
    Active { degraded: bool },
    /// Categories could not be loaded under strict policy.
    Failed,
}

#[derive(Clone)]
pub struct SessionController {
    ctx: Arc<AppContext>,
}

impl SessionController {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Records the credential input and refreshes `login_enabled`.
    ///
    /// Ignored once a login has started.
    pub fn edit_credential(&self, raw: &str) -> bool {
        let valid = is_valid_credential(raw);
        let changed = self.ctx.with_state(|state| {
            if state.session != SessionPhase::SignedOut {
                return false;
            }
            state.login_enabled = valid;
            true
        });
        if changed {
            self.ctx.emit();
        }
        valid
    }

    /// Validates `raw` and loads categories for a new session.
    pub async fn login(&self, raw: &str) -> LoginOutcome {
        let credential = match Credential::parse(raw) {
            Ok(credential) => credential,
            Err(err) => {
                debug!("event=login module=session status=skipped reason=\"{err}\"");
                return LoginOutcome::Rejected;
            }
        };

        let started = self.ctx.with_state(|state| {
            if state.session != SessionPhase::SignedOut {
                return false;
            }
            state.session = SessionPhase::PendingLogin;
            state.login_enabled = false;
            true
        });
        if !started {
            debug!("event=login module=session status=skipped reason=already_started");
            return LoginOutcome::AlreadyStarted;
        }
        self.ctx.emit();

        let result = self.ctx.store().list_categories().await;
        let policy = self.ctx.policy();

        let outcome = self.ctx.with_state(|state| match result {
            Ok(categories) => {
                info!(
                    "event=login module=session status=ok token_version={} categories={}",
                    credential.version(),
                    categories.len()
                );
                state.categories = categories;
                state.session = SessionPhase::Active(Session { credential });
                state.record_outcome(None, false);
                LoginOutcome::Active { degraded: false }
            }
            Err(failure) if policy.uses_fixtures() => {
                warn!(
                    "event=login module=session status=fallback policy={} error=\"{failure}\"",
                    policy.as_str()
                );
                state.categories = fallback_categories();
                state.session = SessionPhase::Active(Session { credential });
                state.record_outcome(Some(&failure), true);
                LoginOutcome::Active { degraded: true }
            }
            Err(failure) => {
                warn!(
                    "event=login module=session status=error policy={} error=\"{failure}\"",
                    policy.as_str()
                );
                state.categories.clear();
                state.session = SessionPhase::SignedOut;
                state.login_enabled = true;
                state.record_outcome(Some(&failure), false);
                LoginOutcome::Failed
            }
        });

        self.ctx.emit();
        outcome
    }
}
