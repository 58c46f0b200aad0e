//! `vetrina-observability` — process-wide telemetry wiring.

pub mod tracing;

pub use tracing::{init, init_with_filter};
