use crate::error::{FxError, Result};
use crate::rates::number::parse_locale_decimal;

/// One currency entry of a rate table, kept as upstream text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRecord {
    /// Short currency code (e.g. "USD").
    pub code: String,
    /// Unit count the value is quoted for, comma-decimal text.
    pub nominal: String,
    /// Price of `nominal` units, comma-decimal text.
    pub value: String,
}

impl RateRecord {
    pub fn new(
        code: impl Into<String>,
        nominal: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            nominal: nominal.into(),
            value: value.into(),
        }
    }

    pub fn nominal(&self) -> Result<f64> {
        parse_locale_decimal("nominal", &self.nominal)
    }

    pub fn value(&self) -> Result<f64> {
        parse_locale_decimal("value", &self.value)
    }

    /// Price of a single unit: `value / nominal`.
    ///
    /// Refuses empty codes, zero nominals and non-finite quotients, so a
    /// successful result is always safe to publish.
    pub fn per_unit_rate(&self) -> Result<f64> {
        if self.code.is_empty() {
            return Err(FxError::MissingCode);
        }

        let nominal = self.nominal()?;
        let value = self.value()?;

        if nominal == 0.0 {
            return Err(FxError::ZeroNominal {
                code: self.code.clone(),
            });
        }

        let rate = value / nominal;
        if !rate.is_finite() {
            return Err(FxError::NonFiniteRate {
                code: self.code.clone(),
            });
        }
        Ok(rate)
    }
}
