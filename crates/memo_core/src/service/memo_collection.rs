//! Memo mutation use-cases: create, edit, save, delete.
//!
//! # Responsibility
//! - Issue memo writes and reconcile the local list with their outcome.
//! - Own the edit buffer mutations used by the detail pane.
//!
//! # Invariants
//! - Update and delete mutate local state before the remote call and are
//!   never rolled back.
//! - A created memo is appended only to the list it was created for.
//! - Locally synthesized ids never collide with any id seen so far.
//! - Memo content is never logged.

use super::context::AppContext;
use super::navigation::NavigationController;
use crate::model::memo::{CategoryId, MemoDraft, MemoId, NewMemo};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone)]
pub struct MemoCollectionController {
    ctx: Arc<AppContext>,
    navigation: NavigationController,
}

impl MemoCollectionController {
    pub fn new(ctx: Arc<AppContext>, navigation: NavigationController) -> Self {
        Self { ctx, navigation }
    }

    /// Creates a memo titled "New Memo" in the open category, then selects it.
    ///
    /// Returns the id of the appended memo. The follow-up selection fetches
    /// the memo again even though the create response already carries it.
    pub async fn create_memo(
        &self,
        category_id: CategoryId,
        initial_content: impl Into<String>,
    ) -> Option<MemoId> {
        let token = self.ctx.with_state(|state| {
            (state.selection.selected_category_id() == Some(category_id))
                .then(|| state.selection.list_token())
        });
        let Some(token) = token else {
            debug!("event=create_memo module=memos status=skipped category_id={category_id}");
            return None;
        };

        let payload = NewMemo::titled_default(category_id, initial_content);
        let result = self.ctx.store().create_memo(&payload).await;
        let policy = self.ctx.policy();

        let created = self.ctx.with_state(|state| {
            if !state.selection.is_current_list(token) {
                debug!("event=create_memo module=memos status=stale category_id={category_id}");
                return None;
            }
            match result {
                Ok(mut memo) => {
                    memo.category_id.get_or_insert(category_id);
                    info!(
                        "event=create_memo module=memos status=ok category_id={} memo_id={}",
                        category_id, memo.id
                    );
                    let memo_id = memo.id;
                    state.push_memo(memo);
                    state.record_outcome(None, false);
                    Some(Some(memo_id))
                }
                Err(failure) if policy.uses_fixtures() => {
                    let memo_id = state.synthesize_memo_id(now_millis());
                    warn!(
                        "event=create_memo module=memos status=fallback policy={} category_id={} memo_id={} error=\"{}\"",
                        policy.as_str(),
                        category_id,
                        memo_id,
                        failure
                    );
                    state.push_memo(payload.into_memo(memo_id));
                    state.record_outcome(Some(&failure), true);
                    Some(Some(memo_id))
                }
                Err(failure) => {
                    warn!(
                        "event=create_memo module=memos status=error policy={} category_id={} error=\"{}\"",
                        policy.as_str(),
                        category_id,
                        failure
                    );
                    state.record_outcome(Some(&failure), false);
                    Some(None)
                }
            }
        })?;

        self.ctx.emit();
        let memo_id = created?;
        self.navigation.select_memo(memo_id).await;
        Some(memo_id)
    }

    /// Creates a memo from the "add memo" form content.
    ///
    /// Blank content is ignored.
    pub async fn add_memo(&self, content: &str) -> Option<MemoId> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        let category_id = self.selected_category()?;
        self.create_memo(category_id, content).await
    }

    /// Creates an empty memo in the open category.
    pub async fn new_memo(&self) -> Option<MemoId> {
        let category_id = self.selected_category()?;
        self.create_memo(category_id, "").await
    }

    /// Replaces title/content of the selected memo locally and remotely.
    ///
    /// Returns `false` without side effects unless `memo_id` is selected.
    pub async fn update_memo(
        &self,
        memo_id: MemoId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> bool {
        let draft = MemoDraft::new(title, content);
        let applied = self.ctx.with_state(|state| {
            if state.selection.selected_memo_id() != Some(memo_id) {
                return false;
            }
            if let Some(memo) = state.memo_mut(memo_id) {
                memo.apply(&draft);
            }
            if state.edit_target == Some(memo_id) {
                state.edit_buffer = draft.clone();
            } else {
                state.pending_edit = Some((memo_id, draft.clone()));
            }
            true
        });
        if !applied {
            debug!("event=update_memo module=memos status=skipped memo_id={memo_id}");
            return false;
        }

        let result = self.ctx.store().update_memo(memo_id, &draft).await;
        self.ctx.with_state(|state| match result {
            Ok(()) => {
                info!("event=update_memo module=memos status=ok memo_id={memo_id}");
                state.record_outcome(None, false);
            }
            Err(failure) => {
                warn!(
                    "event=update_memo module=memos status=local_only memo_id={memo_id} error=\"{failure}\""
                );
                state.record_outcome(Some(&failure), true);
            }
        });

        self.ctx.emit();
        true
    }

    /// Removes the selected memo locally and remotely, closing the detail
    /// pane.
    ///
    /// Returns `false` without side effects unless `memo_id` is selected.
    pub async fn delete_memo(&self, memo_id: MemoId) -> bool {
        let applied = self.ctx.with_state(|state| {
            if state.selection.selected_memo_id() != Some(memo_id) {
                return false;
            }
            state.remove_memo(memo_id);
            state.close_detail();
            true
        });
        if !applied {
            debug!("event=delete_memo module=memos status=skipped memo_id={memo_id}");
            return false;
        }

        let result = self.ctx.store().delete_memo(memo_id).await;
        self.ctx.with_state(|state| match result {
            Ok(()) => {
                info!("event=delete_memo module=memos status=ok memo_id={memo_id}");
                state.record_outcome(None, false);
            }
            Err(failure) => {
                warn!(
                    "event=delete_memo module=memos status=local_only memo_id={memo_id} error=\"{failure}\""
                );
                state.record_outcome(Some(&failure), true);
            }
        });

        self.ctx.emit();
        true
    }

    /// Replaces the title in the open edit buffer.
    pub fn set_edit_title(&self, title: impl Into<String>) -> bool {
        let title = title.into();
        self.edit_buffer(|draft| draft.title = title)
    }

    /// Replaces the content in the open edit buffer.
    pub fn set_edit_content(&self, content: impl Into<String>) -> bool {
        let content = content.into();
        self.edit_buffer(|draft| draft.content = content)
    }

    /// Saves the edit buffer to the memo it was loaded from.
    ///
    /// Skipped while the buffer belongs to a previous selection.
    pub async fn save_memo(&self) -> bool {
        let pending = self.ctx.with_state(|state| {
            let selected = state.selection.selected_memo_id()?;
            (state.detail_open && state.edit_target == Some(selected))
                .then(|| (selected, state.edit_buffer.clone()))
        });
        let Some((memo_id, draft)) = pending else {
            debug!("event=save_memo module=memos status=skipped");
            return false;
        };
        self.update_memo(memo_id, draft.title, draft.content).await
    }

    fn edit_buffer(&self, edit: impl FnOnce(&mut MemoDraft)) -> bool {
        let changed = self.ctx.with_state(|state| {
            if !state.detail_open {
                return false;
            }
            edit(&mut state.edit_buffer);
            true
        });
        if changed {
            self.ctx.emit();
        }
        changed
    }

    fn selected_category(&self) -> Option<CategoryId> {
        self.ctx
            .with_state(|state| state.selection.selected_category_id())
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
