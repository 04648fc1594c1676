//! Category and memo records.
//!
//! # Responsibility
//! - Define wire-compatible `Category` and `Memo` records.
//! - Define write payloads (`NewMemo`, `MemoDraft`).
//!
//! # Invariants
//! - Missing `title`/`content` in remote payloads decode as empty strings.
//! - `category_id` may be absent in list/detail payloads; lists are already
//!   scoped to one category.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Title given to every memo created from the client.
pub const NEW_MEMO_TITLE: &str = "New Memo";

/// Stable category identifier assigned by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

/// Stable memo identifier assigned by the remote store, or synthesized
/// locally when a create call fails in demo mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoId(pub i64);

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MemoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level grouping of memos. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            name: name.into(),
        }
    }
}

/// One memo as returned by list/detail/create calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: MemoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Memo {
    pub fn new(
        id: i64,
        category_id: Option<CategoryId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: MemoId(id),
            category_id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the editable projection of this memo.
    pub fn draft(&self) -> MemoDraft {
        MemoDraft::new(self.title.clone(), self.content.clone())
    }

    /// Replaces title and content in place.
    pub fn apply(&mut self, draft: &MemoDraft) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
    }
}

/// Create payload. The server assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemo {
    pub category_id: CategoryId,
    pub title: String,
    pub content: String,
}

impl NewMemo {
    /// Builds the payload used by every client-side create.
    pub fn titled_default(category_id: CategoryId, content: impl Into<String>) -> Self {
        Self {
            category_id,
            title: NEW_MEMO_TITLE.to_string(),
            content: content.into(),
        }
    }

    /// Materializes this payload as a memo with the given identity.
    pub fn into_memo(self, id: MemoId) -> Memo {
        Memo {
            id,
            category_id: Some(self.category_id),
            title: self.title,
            content: self.content,
        }
    }
}

/// Title/content pair used as edit buffer and update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl MemoDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Blank template shown for memos with no known detail.
    pub fn blank() -> Self {
        Self::new(NEW_MEMO_TITLE, "")
    }
}
