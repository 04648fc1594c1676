//! Navigation use-cases: open/collapse categories and open memo details.
//!
//! # Responsibility
//! - Drive `SelectionState` transitions and the fetches they trigger.
//! - Fill the edit buffer and open the detail pane.
//!
//! # Invariants
//! - Collapse clears both selections and the memo list unconditionally.
//! - A settled list fetch always leaves the detail pane closed with no memo
//!   selected.
//! - A list or detail completion is applied only if no newer navigation
//!   happened since it was issued.
//! - Once a memo detail fetch settles for the current selection, the detail
//!   pane opens, whatever the remote outcome.

use super::context::AppContext;
use super::fallback::{fallback_memo_detail, fallback_memos};
use crate::model::memo::{CategoryId, Memo, MemoDraft, MemoId};
use crate::state::selection::CategoryToggle;
use log::{debug, info, warn};
use std::sync::Arc;

#[derive(Clone)]
pub struct NavigationController {
    ctx: Arc<AppContext>,
}

impl NavigationController {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Opens `category_id` and loads its memos, or collapses it when it is
    /// already open.
    ///
    /// No-op before login or for categories that are not loaded.
    pub async fn toggle_category(&self, category_id: CategoryId) {
        let toggle = self.ctx.with_state(|state| {
            if !state.session.is_active() || state.category(category_id).is_none() {
                return None;
            }
            let toggle = state.selection.toggle_category(category_id);
            match toggle {
                CategoryToggle::Collapsed => state.clear_memo_pane(),
                CategoryToggle::Opened(_) => {
                    state.memos.clear();
                    state.reset_detail();
                }
            }
            Some(toggle)
        });

        let token = match toggle {
            None => {
                debug!(
                    "event=toggle_category module=navigation status=skipped category_id={category_id}"
                );
                return;
            }
            Some(CategoryToggle::Collapsed) => {
                debug!(
                    "event=collapse_category module=navigation status=ok category_id={category_id}"
                );
                self.ctx.emit();
                return;
            }
            Some(CategoryToggle::Opened(token)) => token,
        };

        let result = self.ctx.store().list_memos(category_id).await;
        let policy = self.ctx.policy();

        let applied = self.ctx.with_state(|state| {
            if !state.selection.is_current_list(token) {
                debug!(
                    "event=list_memos module=navigation status=stale category_id={category_id}"
                );
                return false;
            }
            // The list replaces whatever a concurrent create appended, so any
            // memo selected meanwhile may no longer be listed.
            state.close_detail();
            match result {
                Ok(memos) => {
                    info!(
                        "event=list_memos module=navigation status=ok category_id={} memos={}",
                        category_id,
                        memos.len()
                    );
                    state.replace_memos(memos);
                    state.record_outcome(None, false);
                }
                Err(failure) => {
                    warn!(
                        "event=list_memos module=navigation status=fallback policy={} category_id={} error=\"{}\"",
                        policy.as_str(),
                        category_id,
                        failure
                    );
                    let memos = if policy.uses_fixtures() {
                        fallback_memos(category_id)
                    } else {
                        Vec::new()
                    };
                    state.replace_memos(memos);
                    state.record_outcome(Some(&failure), policy.uses_fixtures());
                }
            }
            true
        });

        if applied {
            self.ctx.emit();
        }
    }

    /// Selects `memo_id`, loads its detail into the edit buffer and opens
    /// the detail pane.
    ///
    /// Returns whether the detail pane was opened for this call. `false`
    /// means the memo is not in the loaded list or a newer selection won.
    pub async fn select_memo(&self, memo_id: MemoId) -> bool {
        let token = self.ctx.with_state(|state| {
            state.memo(memo_id)?;
            state.selection.select_memo(memo_id)
        });
        let Some(token) = token else {
            debug!("event=select_memo module=navigation status=skipped memo_id={memo_id}");
            return false;
        };

        let result = self.ctx.store().get_memo(memo_id).await;
        let policy = self.ctx.policy();

        let applied = self.ctx.with_state(|state| {
            if !state.selection.is_current_detail(token) {
                debug!("event=get_memo module=navigation status=stale memo_id={memo_id}");
                return false;
            }
            let draft = match result {
                Ok(memo) => {
                    debug!("event=get_memo module=navigation status=ok memo_id={memo_id}");
                    state.record_outcome(None, false);
                    memo.draft()
                }
                Err(failure) => {
                    warn!(
                        "event=get_memo module=navigation status=fallback policy={} memo_id={} error=\"{}\"",
                        policy.as_str(),
                        memo_id,
                        failure
                    );
                    state.record_outcome(Some(&failure), true);
                    if policy.uses_fixtures() {
                        fallback_memo_detail(memo_id)
                    } else {
                        state
                            .memo(memo_id)
                            .map(Memo::draft)
                            .unwrap_or_else(MemoDraft::blank)
                    }
                }
            };
            state.open_detail(memo_id, draft);
            true
        });

        if applied {
            self.ctx.emit();
        }
        applied
    }
}
