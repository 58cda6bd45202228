//! demohub greeter library entry.
//!
//! A static greeting endpoint plus a process-wide request counter exposed in
//! Prometheus text format. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
