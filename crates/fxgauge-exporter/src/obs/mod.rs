//! In-process metrics registry.
//!
//! Series live in `DashMap`s keyed by sorted label vectors and are rendered
//! in Prometheus text exposition format by the `/metrics` handler.

pub mod metrics;
