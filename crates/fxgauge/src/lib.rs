//! Top-level facade crate for fxgauge.
//!
//! Re-exports the core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use fxgauge_core::*;
}

pub mod exporter {
    pub use fxgauge_exporter::*;
}
