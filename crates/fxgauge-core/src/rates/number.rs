//! Locale number normalization.
//!
//! The upstream writes decimals with a comma (`"92,5058"`). Values are
//! trimmed, the comma is swapped for a period, and the result parsed as
//! `f64`. Non-finite results (`NaN`, `inf`) are refused so they can never
//! reach the metrics store.

use crate::error::{FxError, Result};

/// Parse a comma-decimal string. `field` names the source element in errors.
pub fn parse_locale_decimal(field: &'static str, raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");

    let n: f64 = normalized.parse().map_err(|_| FxError::InvalidNumber {
        field,
        raw: raw.to_string(),
    })?;

    if !n.is_finite() {
        return Err(FxError::InvalidNumber {
            field,
            raw: raw.to_string(),
        });
    }
    Ok(n)
}
