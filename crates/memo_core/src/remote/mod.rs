//! Remote store contract consumed by the controllers.
//!
//! # Responsibility
//! - Define the async CRUD contract for categories and memos.
//! - Define `RemoteFailure`, the single failure type every transport maps to.
//!
//! # Invariants
//! - The core treats every `RemoteFailure` variant identically; variants
//!   exist for diagnostics only.
//! - Implementations must be `Send + Sync` so overlapping calls can be in
//!   flight at the same time.

mod http;

pub use http::HttpRemoteStore;

use crate::model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId, NewMemo};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RemoteResult<T> = Result<T, RemoteFailure>;

/// Any non-success outcome of a remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// Request never produced a response (connect, timeout, TLS...).
    Transport(String),
    /// Response arrived with a non-2xx status.
    Status(u16),
    /// Response body could not be decoded into the expected shape.
    Decode(String),
}

impl Display for RemoteFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(details) => write!(f, "transport error: {details}"),
            Self::Status(code) => write!(f, "remote returned status {code}"),
            Self::Decode(details) => write!(f, "undecodable remote payload: {details}"),
        }
    }
}

impl Error for RemoteFailure {}

impl From<serde_json::Error> for RemoteFailure {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// CRUD accessors for the category/memo hierarchy.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Lists every category.
    async fn list_categories(&self) -> RemoteResult<Vec<Category>>;
    /// Lists memos belonging to one category.
    async fn list_memos(&self, category_id: CategoryId) -> RemoteResult<Vec<Memo>>;
    /// Gets one memo by id.
    async fn get_memo(&self, memo_id: MemoId) -> RemoteResult<Memo>;
    /// Creates one memo; the returned record carries the server id.
    async fn create_memo(&self, payload: &NewMemo) -> RemoteResult<Memo>;
    /// Replaces title and content of one memo.
    async fn update_memo(&self, memo_id: MemoId, payload: &MemoDraft) -> RemoteResult<()>;
    /// Deletes one memo.
    async fn delete_memo(&self, memo_id: MemoId) -> RemoteResult<()>;
}

/// Decodes a list payload, treating any non-array JSON value as empty.
pub fn coerce_sequence<T: DeserializeOwned>(value: Value) -> RemoteResult<Vec<T>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(RemoteFailure::from))
            .collect(),
        _ => Ok(Vec::new()),
    }
}
