//! Shared error type across fxgauge crates.

use thiserror::Error;

/// Stable error codes, used as log fields and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream unreachable, timed out, or answered with a non-success status.
    Transport,
    /// Declared charset is neither UTF-8 nor windows-1251.
    UnsupportedCharset,
    /// Body is not a well-formed rate document.
    MalformedDocument,
    /// Nominal or value text is not a number.
    InvalidNumber,
    /// Record without a currency code.
    MissingCode,
    /// Nominal of zero.
    ZeroNominal,
    /// Rate computed to NaN or infinity.
    NonFiniteRate,
    /// Settings or mapping file problem.
    Config,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::UnsupportedCharset => "UNSUPPORTED_CHARSET",
            ErrorKind::MalformedDocument => "MALFORMED_DOCUMENT",
            ErrorKind::InvalidNumber => "INVALID_NUMBER",
            ErrorKind::MissingCode => "MISSING_CODE",
            ErrorKind::ZeroNominal => "ZERO_NOMINAL",
            ErrorKind::NonFiniteRate => "NON_FINITE_RATE",
            ErrorKind::Config => "CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FxError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("invalid number in {field}: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },
    #[error("record has no currency code")]
    MissingCode,
    #[error("zero nominal for {code}")]
    ZeroNominal { code: String },
    #[error("non-finite rate for {code}")]
    NonFiniteRate { code: String },
    #[error("config: {0}")]
    Config(String),
}

impl FxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FxError::Transport(_) => ErrorKind::Transport,
            FxError::UnsupportedCharset(_) => ErrorKind::UnsupportedCharset,
            FxError::MalformedDocument(_) => ErrorKind::MalformedDocument,
            FxError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            FxError::MissingCode => ErrorKind::MissingCode,
            FxError::ZeroNominal { .. } => ErrorKind::ZeroNominal,
            FxError::NonFiniteRate { .. } => ErrorKind::NonFiniteRate,
            FxError::Config(_) => ErrorKind::Config,
        }
    }

    /// Errors that only invalidate one record; the rest of the cycle goes on.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            FxError::InvalidNumber { .. }
                | FxError::MissingCode
                | FxError::ZeroNominal { .. }
                | FxError::NonFiniteRate { .. }
        )
    }
}
