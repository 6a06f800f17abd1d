//! trackwire core: commit classification, record/metrics data model, and the
//! shared error surface.
//!
//! This crate carries no runtime or transport dependencies so the pure pieces
//! (classification, title building) can be reused and tested without a tokio
//! runtime or live credentials.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TrackWireError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classify;
pub mod error;
pub mod record;

/// Shared result type.
pub use error::{Result, TrackWireError};
