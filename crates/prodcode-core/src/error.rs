//! # Error Types
//!
//! Error taxonomy for prodcode-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError   - validate_upc / validate_upc_e / validate_ean /     │
//! │                      validate_isbn structural failures                  │
//! │  ExpansionError    - expand_upc_e (length not 6/7/8, parity unknown)    │
//! │  SuppressionError  - suppress_upc_a (not 12 digits, no zero run)        │
//! │  NoMatch           - detect_product_code found nothing                  │
//! │                                                                         │
//! │  CodeError         - umbrella over all of the above                     │
//! │                                                                         │
//! │  Checksum mismatch is NOT an error: validators return Ok(false).        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (format, code, length)
//! 3. Every variant maps to exactly one [`ErrorKind`]

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::types::CodeType;

// =============================================================================
// Error Kind
// =============================================================================

/// Machine-readable classification shared by every error in this crate.
///
/// Serialized in `SCREAMING_SNAKE_CASE` so callers can switch on it:
/// ```json
/// { "code": "INVALID_LENGTH", "message": "UPC-A must be 12 characters long, got 11: 74819600044" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Code length outside the format's accepted set.
    InvalidLength,
    /// Characters outside the format's alphabet.
    NonNumeric,
    /// UPC-E input length not in {6, 7, 8}.
    ExpansionFailed,
    /// No UPC-E suppression condition matched.
    SuppressionFailed,
    /// UPC-E even/odd pattern is not in the parity table.
    NoParityMatch,
    /// The detector found no valid format.
    NoMatch,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural failures raised by the format validators.
///
/// ## When This Occurs
/// - Wrong length for the format (`InvalidLength`)
/// - Letters, separators or punctuation where digits belong (`NonNumeric`)
/// - A 6/7-digit UPC-E whose parity pattern is unknown (`NoParityMatch`)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{format} must be {expected} characters long, got {length}: {code}")]
    InvalidLength {
        format: CodeType,
        code: String,
        length: usize,
        expected: &'static str,
    },

    #[error("{format} contains characters outside its alphabet: {code}")]
    NonNumeric { format: CodeType, code: String },

    #[error("UPC-E parity pattern {pattern} has no matching check digit")]
    NoParityMatch { pattern: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidLength { .. } => ErrorKind::InvalidLength,
            ValidationError::NonNumeric { .. } => ErrorKind::NonNumeric,
            ValidationError::NoParityMatch { .. } => ErrorKind::NoParityMatch,
        }
    }
}

// =============================================================================
// Expansion Error
// =============================================================================

/// Failures expanding UPC-E to UPC-A.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpansionError {
    /// Input is not 6, 7 or 8 digits.
    #[error("UPC-E must be 6, 7 or 8 digits to expand, got {length}: {code}")]
    ExpansionFailed { code: String, length: usize },

    #[error("UPC-E can only contain digits: {code}")]
    NonNumeric { code: String },

    /// The six significant digits produce an even/odd pattern that the
    /// parity table does not contain.
    #[error("UPC-E parity pattern {pattern} has no matching check digit")]
    NoParityMatch { pattern: String },
}

impl ExpansionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpansionError::ExpansionFailed { .. } => ErrorKind::ExpansionFailed,
            ExpansionError::NonNumeric { .. } => ErrorKind::NonNumeric,
            ExpansionError::NoParityMatch { .. } => ErrorKind::NoParityMatch,
        }
    }
}

/// A UPC-E that cannot be expanded is structurally invalid as UPC-E.
impl From<ExpansionError> for ValidationError {
    fn from(err: ExpansionError) -> Self {
        match err {
            ExpansionError::ExpansionFailed { code, length } => ValidationError::InvalidLength {
                format: CodeType::UpcE,
                code,
                length,
                expected: "6, 7 or 8",
            },
            ExpansionError::NonNumeric { code } => ValidationError::NonNumeric {
                format: CodeType::UpcE,
                code,
            },
            ExpansionError::NoParityMatch { pattern } => ValidationError::NoParityMatch { pattern },
        }
    }
}

// =============================================================================
// Suppression Error
// =============================================================================

/// Failures compressing UPC-A to UPC-E.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuppressionError {
    #[error("UPC-A must be 12 digits to suppress, got {length}: {code}")]
    InvalidLength { code: String, length: usize },

    #[error("UPC-A can only contain digits: {code}")]
    NonNumeric { code: String },

    /// None of the four zero-run conditions matched.
    #[error("UPC-A {code} has no zero run that UPC-E can suppress")]
    SuppressionFailed { code: String },
}

impl SuppressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SuppressionError::InvalidLength { .. } => ErrorKind::InvalidLength,
            SuppressionError::NonNumeric { .. } => ErrorKind::NonNumeric,
            SuppressionError::SuppressionFailed { .. } => ErrorKind::SuppressionFailed,
        }
    }
}

// =============================================================================
// No Match
// =============================================================================

/// The detector tried every enabled format and none validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} is not a valid UPC-A, UPC-E, EAN or ISBN code")]
pub struct NoMatch {
    pub code: String,
}

// =============================================================================
// Unknown Code Type
// =============================================================================

/// A code type label that [`CodeType`]'s `FromStr` does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown code type '{0}', expected one of: upc-a, upc-e, ean, isbn")]
pub struct UnknownCodeType(pub String);

// =============================================================================
// Check Digit Out Of Range
// =============================================================================

/// A check digit value above 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("check digit must be between 0 and 10, got {0}")]
pub struct CheckDigitOutOfRange(pub u8);

// =============================================================================
// Code Error
// =============================================================================

/// Umbrella error for callers that drive several operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Expansion error: {0}")]
    Expansion(#[from] ExpansionError),

    #[error("Suppression error: {0}")]
    Suppression(#[from] SuppressionError),

    #[error("Detection error: {0}")]
    NoMatch(#[from] NoMatch),
}

impl CodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodeError::Validation(e) => e.kind(),
            CodeError::Expansion(e) => e.kind(),
            CodeError::Suppression(e) => e.kind(),
            CodeError::NoMatch(_) => ErrorKind::NoMatch,
        }
    }

    /// Whether the input itself was malformed, as opposed to well-formed
    /// input that simply is not a valid or convertible code.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidLength | ErrorKind::NonNumeric | ErrorKind::ExpansionFailed
        )
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CodeError.
pub type CodeResult<T> = Result<T, CodeError>;

// =============================================================================
// Unit Tests
// =============================================================================
