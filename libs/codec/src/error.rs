//! Protocol-level errors for push envelope processing
//!
//! Provides error handling for the push protocol v3 codec with diagnostic
//! context for debugging and monitoring. Each variant carries the absolute
//! byte offset in the top-level buffer at which the problem was detected,
//! including inside nested sub-messages.

use thiserror::Error;

/// Wire decoding errors with diagnostic context
///
/// Every error is terminal for the decode call that raised it: no partial
/// message is ever returned. Callers decide whether to drop the frame and
/// continue or to treat the failure as fatal. Encoding has no error type;
/// a typed envelope always encodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Buffer ended before the declared or implied data
    #[error("truncated input at offset {offset}: need {need} more bytes, have {have} (context: {context})")]
    TruncatedInput {
        offset: usize,
        need: usize,
        have: usize,
        context: &'static str,
    },

    /// Varint ran past the maximum encodable length
    #[error("malformed varint starting at offset {offset}: no terminator within 10 bytes")]
    MalformedVarint { offset: usize },

    /// Field number is outside the valid range
    #[error("invalid field number {field_number} at offset {offset}: valid numbers are 1-536870911")]
    InvalidFieldNumber { field_number: u64, offset: usize },

    /// Wire type is not supported for this field
    #[error("unsupported wire type {wire_type} for field {field_number} at offset {offset}")]
    UnsupportedWireType {
        field_number: u32,
        wire_type: u8,
        offset: usize,
    },

    /// String field payload is not valid UTF-8
    #[error("invalid UTF-8 in string field {field_number} at offset {offset}")]
    InvalidUtf8 { field_number: u32, offset: usize },

    /// A second body payload arrived for an envelope that already has one
    #[error("conflicting oneof field at offset {offset}: body already holds {existing}, got {incoming}")]
    ConflictingOneofField {
        existing: &'static str,
        incoming: &'static str,
        offset: usize,
    },

    /// Nested decode consumed a different byte count than the length prefix declared
    #[error("sub-message length mismatch at offset {offset}: declared {declared} bytes, consumed {consumed}")]
    SubMessageLengthMismatch {
        declared: usize,
        consumed: usize,
        offset: usize,
    },
}

impl ProtocolError {
    /// Create a TruncatedInput error with read context
    pub fn truncated_input(offset: usize, need: usize, have: usize, context: &'static str) -> Self {
        Self::TruncatedInput {
            offset,
            need,
            have,
            context,
        }
    }

    /// Create an UnsupportedWireType error from a decoded tag
    pub fn unsupported_wire_type(field_number: u32, wire_type: u8, offset: usize) -> Self {
        Self::UnsupportedWireType {
            field_number,
            wire_type,
            offset,
        }
    }

    /// Create a ConflictingOneofField error naming both body kinds
    pub fn conflicting_oneof_field(
        existing: &'static str,
        incoming: &'static str,
        offset: usize,
    ) -> Self {
        Self::ConflictingOneofField {
            existing,
            incoming,
            offset,
        }
    }

    /// Absolute byte offset the error was detected at
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedInput { offset, .. }
            | Self::MalformedVarint { offset }
            | Self::InvalidFieldNumber { offset, .. }
            | Self::UnsupportedWireType { offset, .. }
            | Self::InvalidUtf8 { offset, .. }
            | Self::ConflictingOneofField { offset, .. }
            | Self::SubMessageLengthMismatch { offset, .. } => *offset,
        }
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
