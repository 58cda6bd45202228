//! demohub core: runtime-free primitives shared by the demo services.
//!
//! This crate defines the error surface, the config sections both services
//! share, the stored record model, and the Prometheus text exposition
//! helpers. It carries no HTTP or async runtime dependencies so both service
//! crates can build on it without pulling each other in.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DemoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod model;
pub mod obs;

/// Shared result type.
pub use error::{ClientCode, DemoError, Result};
pub use model::{Item, NewItem};
