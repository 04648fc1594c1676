//! Single in-memory state tree owned by the core.
//!
//! # Responsibility
//! - Hold session, lists, selection, edit buffer and degraded-mode markers.
//! - Provide the state-wide transitions shared by several controllers.
//! - Project itself into immutable `Snapshot`s.
//!
//! # Invariants
//! - A selected memo is always present in `memos`.
//! - `detail_open` implies a selected memo.
//! - Synthesized memo ids are strictly greater than every id seen so far.

pub mod selection;
pub mod snapshot;

use crate::auth::credential::Credential;
use crate::model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId};
use crate::remote::RemoteFailure;
use selection::SelectionState;
use snapshot::{SessionStatus, Snapshot};

/// Established session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub credential: Credential,
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    SignedOut,
    PendingLogin,
    Active(Session),
}

impl SessionPhase {
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::SignedOut => SessionStatus::SignedOut,
            Self::PendingLogin => SessionStatus::PendingLogin,
            Self::Active(_) => SessionStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: SessionPhase,
    pub login_enabled: bool,
    pub categories: Vec<Category>,
    pub memos: Vec<Memo>,
    pub selection: SelectionState,
    pub edit_buffer: MemoDraft,
    /// Memo the edit buffer was loaded from.
    pub edit_target: Option<MemoId>,
    /// Local edit made while the memo's detail fetch was still in flight.
    pub pending_edit: Option<(MemoId, MemoDraft)>,
    pub detail_open: bool,
    pub degraded: bool,
    pub last_failure: Option<String>,
    highest_memo_id: i64,
    last_local_id: i64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category_id: CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    pub fn memo(&self, memo_id: MemoId) -> Option<&Memo> {
        self.memos.iter().find(|memo| memo.id == memo_id)
    }

    pub fn memo_mut(&mut self, memo_id: MemoId) -> Option<&mut Memo> {
        self.memos.iter_mut().find(|memo| memo.id == memo_id)
    }

    /// Replaces the memo list wholesale.
    pub fn replace_memos(&mut self, memos: Vec<Memo>) {
        for memo in &memos {
            self.observe_memo_id(memo.id);
        }
        self.memos = memos;
    }

    /// Appends one memo to the open list.
    pub fn push_memo(&mut self, memo: Memo) {
        self.observe_memo_id(memo.id);
        self.memos.push(memo);
    }

    /// Removes one memo; returns whether it was present.
    pub fn remove_memo(&mut self, memo_id: MemoId) -> bool {
        let before = self.memos.len();
        self.memos.retain(|memo| memo.id != memo_id);
        self.memos.len() != before
    }

    /// Closes the detail pane and forgets the memo selection.
    pub fn close_detail(&mut self) {
        self.selection.clear_memo();
        self.reset_detail();
    }

    /// Opens the detail pane on `memo_id` with the given buffer.
    ///
    /// A pending local edit of the same memo wins over `draft`.
    pub fn open_detail(&mut self, memo_id: MemoId, draft: MemoDraft) {
        self.edit_buffer = match self.pending_edit.take() {
            Some((pending_id, pending)) if pending_id == memo_id => pending,
            _ => draft,
        };
        self.edit_target = Some(memo_id);
        self.detail_open = true;
    }

    /// Closes the detail pane without touching the selection.
    pub fn reset_detail(&mut self) {
        self.detail_open = false;
        self.edit_buffer = MemoDraft::default();
        self.edit_target = None;
        self.pending_edit = None;
    }

    /// Empties the memo pane after a collapse.
    pub fn clear_memo_pane(&mut self) {
        self.memos.clear();
        self.reset_detail();
    }

    /// Marks the outcome of the most recently settled remote call.
    pub fn record_outcome(&mut self, failure: Option<&RemoteFailure>, substituted: bool) {
        self.degraded = substituted;
        if let Some(failure) = failure {
            self.last_failure = Some(failure.to_string());
        }
    }

    /// Allocates an id for a memo that exists only locally.
    ///
    /// Seeded from wall-clock milliseconds, but always above every id seen
    /// in fetched or previously synthesized records.
    pub fn synthesize_memo_id(&mut self, now_millis: i64) -> MemoId {
        let next = now_millis
            .max(self.last_local_id.saturating_add(1))
            .max(self.highest_memo_id.saturating_add(1));
        self.last_local_id = next;
        self.observe_memo_id(MemoId(next));
        MemoId(next)
    }

    fn observe_memo_id(&mut self, memo_id: MemoId) {
        self.highest_memo_id = self.highest_memo_id.max(memo_id.0);
    }

    pub fn snapshot(&self) -> Snapshot {
        let selected_category_id = self.selection.selected_category_id();
        let selected_memo_id = self.selection.selected_memo_id();
        Snapshot {
            session: self.session.status(),
            login_enabled: self.login_enabled,
            categories: self.categories.clone(),
            selected_category_id,
            selected_category_name: selected_category_id
                .and_then(|id| self.category(id))
                .map(|category| category.name.clone()),
            memos: self.memos.clone(),
            selected_memo_id,
            memo_edit_buffer: self.edit_buffer.clone(),
            detail_open: self.detail_open,
            new_memo_enabled: selected_category_id.is_some(),
            delete_memo_enabled: selected_memo_id.is_some(),
            degraded: self.degraded,
            last_failure: self.last_failure.clone(),
        }
    }
}
