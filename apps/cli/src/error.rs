//! # Error Report
//!
//! The shape a failed command takes on stdout/stderr.
//!
//! ```json
//! {
//!   "code": "INVALID_LENGTH",
//!   "message": "UPC-A must be 12 characters long, got 11: 74819600044",
//!   "malformed": true
//! }
//! ```
//!
//! `malformed` separates bad input (exit status 2) from well-formed input
//! that simply is not a valid or convertible code (exit status 1).

use prodcode_core::{CodeError, ErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Whether the input itself was malformed
    pub malformed: bool,
}

impl ErrorReport {
    /// `SCREAMING_SNAKE_CASE` label matching the JSON `code` field.
    pub fn code_label(&self) -> &'static str {
        match self.code {
            ErrorKind::InvalidLength => "INVALID_LENGTH",
            ErrorKind::NonNumeric => "NON_NUMERIC",
            ErrorKind::ExpansionFailed => "EXPANSION_FAILED",
            ErrorKind::SuppressionFailed => "SUPPRESSION_FAILED",
            ErrorKind::NoParityMatch => "NO_PARITY_MATCH",
            ErrorKind::NoMatch => "NO_MATCH",
        }
    }
}

impl From<&CodeError> for ErrorReport {
    fn from(err: &CodeError) -> Self {
        ErrorReport {
            code: err.kind(),
            message: err.to_string(),
            malformed: err.is_malformed_input(),
        }
    }
}

impl From<CodeError> for ErrorReport {
    fn from(err: CodeError) -> Self {
        ErrorReport::from(&err)
    }
}
