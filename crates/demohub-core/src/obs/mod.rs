//! Prometheus text exposition helpers.
//!
//! Counters are stored as atomics and rendered on demand by the `/metrics`
//! handlers of the service crates. Process families are read from `/proc`
//! at scrape time.

pub mod metrics;
pub mod process;

pub use metrics::{format_value, Counter, CONTENT_TYPE};
pub use process::ProcessCollector;
