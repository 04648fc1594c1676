//! Use-case controllers over the shared application context.
//!
//! # Responsibility
//! - Orchestrate remote calls into state transitions and snapshots.
//! - Apply the configured fallback policy to remote failures.
//!
//! # Invariants
//! - The state lock is never held across a remote call.
//! - Completions carrying a stale generation are dropped without emitting.

pub mod context;
pub mod fallback;
pub mod memo_collection;
pub mod navigation;
pub mod session;
