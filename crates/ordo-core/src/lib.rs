//! # ordo-core
//!
//! Core types shared across the ordo-rs workspace: the error hierarchy,
//! the `ensure!` / `fail!` convenience macros, and the bounded
//! memoization cache used by the calendar engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Capacity-bounded associative cache.
pub mod cache;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cache::BoundedCache;
pub use errors::{Error, Result};
