//! Daily rate table: decoding and per-record arithmetic.
//!
//! - `charset`: picks the text encoding from the XML declaration and decodes
//!   the body (UTF-8 or windows-1251, nothing else).
//! - `document`: deserializes the decoded text into a [`RateDocument`].
//! - `number`: comma-decimal normalization.
//! - `record`: [`RateRecord`] and the guarded `value / nominal` computation.
//!
//! Nothing here panics on upstream input; all problems come back as
//! `FxError`, split into document-level errors (abort the cycle) and
//! record-level errors (skip one currency).

pub mod charset;
pub mod document;
pub mod number;
pub mod record;

pub use document::RateDocument;
pub use record::RateRecord;
