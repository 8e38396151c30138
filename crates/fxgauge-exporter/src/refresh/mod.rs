//! Background refresh: fetch the daily table, decode it, publish gauges.
//!
//! - `source`: where the raw document comes from (`RateSource`, `CbrSource`).
//! - `pipeline`: one fetch-parse-publish cycle.
//! - `scheduler`: the cancellable loop that runs a cycle per interval.

pub mod pipeline;
pub mod scheduler;
pub mod source;

pub use pipeline::{CycleReport, Pipeline};
pub use source::{CbrSource, RateSource};
