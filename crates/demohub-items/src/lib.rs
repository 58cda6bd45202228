//! demohub item store library entry.
//!
//! CRUD over a flat collection of records persisted as one JSON array on
//! disk, plus static root/health/metrics endpoints. The store layer is
//! backend-agnostic; the HTTP layer maps store results onto axum responses.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod store;
