//! Domain validation errors for decoded push payloads
//!
//! Wire-level failures live in the codec crate. These errors cover the
//! type layer on top of it: discriminant fields that do not map to a known
//! enum value, and decimal strings that do not parse.

use thiserror::Error;

/// Validation errors raised by typed field accessors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Integer discriminant does not map to a known enum value
    #[error("unknown {enum_name} discriminant {value}")]
    UnknownDiscriminant { enum_name: &'static str, value: i32 },

    /// Decimal-formatted string field failed to parse
    #[error("malformed decimal in {field}: {value:?}")]
    MalformedDecimal { field: &'static str, value: String },
}

impl TypeError {
    /// Create an UnknownDiscriminant error for the named enum
    pub fn unknown_discriminant(enum_name: &'static str, value: i32) -> Self {
        Self::UnknownDiscriminant { enum_name, value }
    }

    /// Create a MalformedDecimal error carrying the offending text
    pub fn malformed_decimal(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedDecimal {
            field,
            value: value.into(),
        }
    }
}

/// Result type for typed accessor operations
pub type TypeResult<T> = std::result::Result<T, TypeError>;
