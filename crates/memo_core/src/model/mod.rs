//! Domain model for the category/memo hierarchy.
//!
//! # Responsibility
//! - Define the records exchanged with the remote store.
//! - Define the edit buffer shape shared by detail view and save path.
//!
//! # Invariants
//! - Identifiers are opaque to the core and compared by value only.
//! - A memo belongs to exactly one category.

pub mod memo;
