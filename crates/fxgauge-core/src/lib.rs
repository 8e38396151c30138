//! fxgauge core: rate document decoding, locale number handling, and the
//! shared error surface.
//!
//! This crate knows nothing about HTTP, schedules, or metrics. It turns the
//! raw bytes of an upstream daily rate table into [`rates::RateDocument`] and
//! derives per-unit rates from its records, so it can be driven from tests
//! with canned documents.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `FxError`/`Result` so a bad upstream document never takes the
//! exporter down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod rates;

/// Shared result type.
pub use error::{ErrorKind, FxError, Result};
