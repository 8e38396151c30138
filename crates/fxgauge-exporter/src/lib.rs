//! fxgauge exporter library entry.
//!
//! Wires settings, the code-name mapping, the refresh loop, and the metrics
//! endpoints into one exporter. Consumed by the binary (`main.rs`) and by the
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod refresh;
pub mod router;
