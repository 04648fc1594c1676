//! Core state machine for the memo client.
//! This crate owns session, navigation and memo synchronization rules; the
//! rendering surface only ever sees `Snapshot`s.

pub mod app;
pub mod auth;
pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod service;
pub mod state;

pub use app::MemoApp;
pub use auth::credential::{is_valid_credential, Credential, CredentialError};
pub use config::{AppConfig, ConfigError, FallbackPolicy};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId, NewMemo, NEW_MEMO_TITLE};
pub use remote::{HttpRemoteStore, RemoteFailure, RemoteResult, RemoteStore};
pub use service::session::LoginOutcome;
pub use state::snapshot::{NullProjector, SessionStatus, Snapshot, ViewProjector};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
