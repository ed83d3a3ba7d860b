//! Error types for typebin encoding and decoding.

use thiserror::Error;

/// Error categories shared by encode and decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input shorter than the codec requires, or otherwise malformed bytes
    MalformedInput,
    /// E002: Dynamic value tag outside the known range
    UnknownTag,
    /// E003: Hex or base64 text the matching encoder could not have produced
    MalformedText,
    /// E004: Value cannot be represented by the codec
    UnsupportedValue,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedInput => "E001",
            ErrorCode::UnknownTag => "E002",
            ErrorCode::MalformedText => "E003",
            ErrorCode::UnsupportedValue => "E004",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === E001: Malformed input ===
    #[error("[E001] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E001] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("[E001] {remaining} trailing bytes after decoded value")]
    TrailingBytes { remaining: usize },

    #[error("[E001] nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },

    // === E002: Unknown tag ===
    #[error("[E002] unknown dynamic value tag: {tag}")]
    UnknownTag { tag: u8 },

    // === E003: Malformed text ===
    #[error("[E003] malformed hex: {reason}")]
    MalformedHex { reason: String },

    #[error("[E003] malformed base64: {reason}")]
    MalformedBase64 { reason: String },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnknownTag { .. } => ErrorCode::UnknownTag,
            DecodeError::MalformedHex { .. } | DecodeError::MalformedBase64 { .. } => {
                ErrorCode::MalformedText
            }
            _ => ErrorCode::MalformedInput,
        }
    }
}

impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        DecodeError::MalformedHex {
            reason: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::MalformedBase64 {
            reason: err.to_string(),
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[E004] unsupported value: {reason}")]
    UnsupportedValue { reason: String },

    #[error("[E004] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::UnsupportedValue
    }
}

/// Error while building a codec schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate record field: {name}")]
    DuplicateField { name: String },
}
