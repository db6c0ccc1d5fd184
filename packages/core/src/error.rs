use thiserror::Error;

use crate::types::FieldTag;

/// Errors returned by the codec operations.
///
/// Every error is local to the call that produced it; no operation leaves a
/// partially modified record behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StdVerError {
    #[error("invalid version identifier {0:?}")]
    InvalidFormat(String),

    #[error("cannot bump maturity phase past release")]
    PhaseOverflow,

    #[error("cannot bump availability scope past GA")]
    ScopeOverflow,

    #[error("unknown field {0:?}; expected one of: M, N, p, R, D, H, S")]
    UnknownField(String),

    #[error("invalid value {value:?} for field {field}: {reason}")]
    InvalidFieldValue {
        field: FieldTag,
        value: String,
        reason: String,
    },

    #[error("unsupported render mode: format {format:?} with markup {markup:?}")]
    UnsupportedRenderMode { format: String, markup: String },

    #[error("bumping the snapshot date requires the current date")]
    MissingDate,

    #[error("invalid level {0}; expected 0, 1 or 2")]
    InvalidLevel(u8),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl StdVerError {
    pub(crate) fn invalid_value(
        field: FieldTag,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StdVerError::InvalidFieldValue {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
