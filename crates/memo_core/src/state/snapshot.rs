//! Read-only projection of core state handed to the rendering surface.
//!
//! # Responsibility
//! - Define `Snapshot`, the only shape the view ever observes.
//! - Define the `ViewProjector` seam.
//!
//! # Invariants
//! - `new_memo_enabled == selected_category_id.is_some()`.
//! - `delete_memo_enabled == selected_memo_id.is_some()`.
//! - Snapshots never carry the session credential.

use crate::model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId};
use serde::Serialize;

/// Session lifecycle as seen by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    SignedOut,
    PendingLogin,
    Active,
}

/// Immutable view of the application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub session: SessionStatus,
    pub login_enabled: bool,
    pub categories: Vec<Category>,
    pub selected_category_id: Option<CategoryId>,
    pub selected_category_name: Option<String>,
    pub memos: Vec<Memo>,
    pub selected_memo_id: Option<MemoId>,
    pub memo_edit_buffer: MemoDraft,
    pub detail_open: bool,
    pub new_memo_enabled: bool,
    pub delete_memo_enabled: bool,
    /// Most recently settled remote call was replaced by fixture or
    /// synthesized data.
    pub degraded: bool,
    pub last_failure: Option<String>,
}

impl Snapshot {
    /// Whether the memo list pane is visible.
    pub fn memo_list_open(&self) -> bool {
        self.selected_category_id.is_some()
    }

    pub fn memo(&self, memo_id: MemoId) -> Option<&Memo> {
        self.memos.iter().find(|memo| memo.id == memo_id)
    }
}

/// Consumer of snapshots; implemented by whatever renders the UI.
pub trait ViewProjector: Send + Sync {
    fn render(&self, snapshot: &Snapshot);
}

/// Projector that discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProjector;

impl ViewProjector for NullProjector {
    fn render(&self, _snapshot: &Snapshot) {}
}
