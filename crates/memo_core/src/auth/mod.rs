//! Access credential validation.
//!
//! # Responsibility
//! - Decide whether a raw token may be used to start a session.
//!
//! # Invariants
//! - Validation is pure and never logs the raw token.

pub mod credential;
