//! # Validation Module
//!
//! Format validators for UPC-A, UPC-E, EAN-13 and ISBN.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Structure                                                    │
//! │  ├── Length in the format's accepted set?   no → Err(InvalidLength)    │
//! │  └── Only the format's alphabet?            no → Err(NonNumeric)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Checksum                                                     │
//! │  ├── Recompute the check digit (crate::check_digit)                    │
//! │  └── Compare with the code's own check digit → Ok(true) / Ok(false)    │
//! │                                                                         │
//! │  A checksum mismatch is a normal negative answer, never an error.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator trims surrounding whitespace first.
//!
//! ## Usage
//! ```rust
//! use prodcode_core::validation::{validate_ean, validate_isbn};
//!
//! assert_eq!(validate_ean("5901234123457"), Ok(true));
//!
//! let isbn = validate_isbn("978-0-306-40615-7").unwrap();
//! assert!(isbn.valid);
//! assert_eq!(isbn.parts.unwrap().publisher, "0640");
//! ```

use tracing::trace;

use crate::check_digit::{
    ean_check_digit, isbn10_check_digit, isbn10_weighted_sum, isbn13_check_digit,
    isbn13_weighted_sum, upc_check_digit,
};
use crate::error::{ExpansionError, ValidationError};
use crate::isbn;
use crate::types::{CheckDigit, CodeType, IsbnValidation};
use crate::upc_e;
use crate::{EAN_13_LENGTH, ISBN_10_LENGTH, ISBN_13_LENGTH, UPC_A_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Structural Checks
// =============================================================================

fn require_length(
    format: CodeType,
    code: &str,
    accepted: &[usize],
    expected: &'static str,
) -> ValidationResult<()> {
    let length = code.chars().count();
    if accepted.contains(&length) {
        return Ok(());
    }

    Err(ValidationError::InvalidLength {
        format,
        code: code.to_string(),
        length,
        expected,
    })
}

fn require_digits(format: CodeType, code: &str) -> ValidationResult<()> {
    if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }

    Err(ValidationError::NonNumeric {
        format,
        code: code.to_string(),
    })
}

/// The check digit as written at the end of a code.
fn trailing_check_digit(code: &str) -> Option<CheckDigit> {
    code.chars().last().and_then(CheckDigit::from_char)
}

// =============================================================================
// UPC-A
// =============================================================================

fn structural_upc(code: &str) -> ValidationResult<&str> {
    let code = code.trim();
    require_length(CodeType::UpcA, code, &[UPC_A_LENGTH], "12")?;
    require_digits(CodeType::UpcA, code)?;
    Ok(code)
}

/// Validates a 12-digit UPC-A code.
///
/// ## Rules
/// - Exactly 12 characters, else `InvalidLength`
/// - Digits only, else `NonNumeric`
/// - `Ok(true)` iff the 12th digit equals the check digit of the first 11
///
/// ## Example
/// ```rust
/// use prodcode_core::validate_upc;
///
/// assert_eq!(validate_upc("036000291452"), Ok(true));
/// assert_eq!(validate_upc("036000291453"), Ok(false));
/// assert!(validate_upc("03600029145").is_err());
/// ```
pub fn validate_upc(code: &str) -> ValidationResult<bool> {
    let code = structural_upc(code)?;
    Ok(trailing_check_digit(code) == Some(upc_check_digit(code)))
}

/// Recomputes the check digit of a structurally valid UPC-A.
pub fn expected_upc_check_digit(code: &str) -> ValidationResult<CheckDigit> {
    structural_upc(code).map(upc_check_digit)
}

// =============================================================================
// UPC-E
// =============================================================================

/// Validates a 6, 7 or 8 digit UPC-E code through its UPC-A expansion.
///
/// ## Rules
/// - Digits only, else `NonNumeric`
/// - Length not 6, 7 or 8: `Ok(false)` (not expandable, so not UPC-E)
/// - 6/7 digits with an unknown parity pattern: `NoParityMatch`
/// - Otherwise the UPC-A check digit of the expansion is compared with the
///   code's own check digit: the written one for 8 digits, the
///   parity-resolved one for 6 and 7 digits
///
/// ## Example
/// ```rust
/// use prodcode_core::validate_upc_e;
///
/// assert_eq!(validate_upc_e("02345673"), Ok(true));
/// assert_eq!(validate_upc_e("02345674"), Ok(false));
/// assert_eq!(validate_upc_e("654321"), Ok(true));
/// assert_eq!(validate_upc_e("748196000441"), Ok(false)); // 12 digits
/// ```
pub fn validate_upc_e(code: &str) -> ValidationResult<bool> {
    let code = code.trim();
    require_digits(CodeType::UpcE, code)?;

    let expanded = match upc_e::expand(code) {
        Ok(expanded) => expanded,
        Err(ExpansionError::ExpansionFailed { length, .. }) => {
            trace!(code = %code, length, "not an expandable UPC-E length");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };

    let written = if code.len() == 8 {
        trailing_check_digit(code)
    } else {
        trailing_check_digit(&expanded)
    };

    Ok(written == Some(upc_check_digit(&expanded)))
}

/// Recomputes the UPC-A check digit of a UPC-E code's expansion.
pub fn expected_upc_e_check_digit(code: &str) -> ValidationResult<CheckDigit> {
    let code = code.trim();
    require_digits(CodeType::UpcE, code)?;
    let expanded = upc_e::expand(code)?;
    Ok(upc_check_digit(&expanded))
}

// =============================================================================
// EAN-13
// =============================================================================

fn structural_ean(code: &str) -> ValidationResult<&str> {
    let code = code.trim();
    require_length(CodeType::Ean, code, &[EAN_13_LENGTH], "13")?;
    require_digits(CodeType::Ean, code)?;
    Ok(code)
}

/// Validates a 13-digit EAN code.
///
/// ## Rules
/// - Exactly 13 characters (12-digit input is not padded), else `InvalidLength`
/// - Digits only, else `NonNumeric`
/// - `Ok(true)` iff the 13th digit equals the check digit of the first 12
pub fn validate_ean(code: &str) -> ValidationResult<bool> {
    let code = structural_ean(code)?;
    Ok(trailing_check_digit(code) == Some(ean_check_digit(code)))
}

/// Recomputes the check digit of a structurally valid EAN-13.
pub fn expected_ean_check_digit(code: &str) -> ValidationResult<CheckDigit> {
    structural_ean(code).map(ean_check_digit)
}

// =============================================================================
// ISBN
// =============================================================================

/// Normalizes and structurally checks an ISBN.
///
/// `X` is only legal as the final character of an ISBN-10.
fn structural_isbn(code: &str) -> ValidationResult<String> {
    let isbn = isbn::normalize(code);
    require_length(CodeType::Isbn, &isbn, &[ISBN_10_LENGTH, ISBN_13_LENGTH], "10 or 13")?;

    let body = &isbn[..isbn.len() - 1];
    let misplaced_x = body.contains('X') || (isbn.len() == ISBN_13_LENGTH && isbn.ends_with('X'));
    if misplaced_x {
        return Err(ValidationError::NonNumeric {
            format: CodeType::Isbn,
            code: isbn,
        });
    }

    Ok(isbn)
}

/// Validates an ISBN-10 or ISBN-13, returning its parts when valid.
///
/// ## Rules
/// - Everything but digits and `X`/`x` is stripped first
/// - 10 or 13 characters remain, else `InvalidLength`
/// - ISBN-10: weighted sum divisible by 11
/// - ISBN-13: weighted sum divisible by 10
/// - Checksum failure is `valid: false` with no parts
///
/// ## Example
/// ```rust
/// use prodcode_core::validate_isbn;
///
/// let result = validate_isbn("0306406152").unwrap();
/// assert!(result.valid);
/// assert_eq!(result.parts.unwrap().group, "03");
///
/// assert!(!validate_isbn("0306406153").unwrap().valid);
/// assert!(validate_isbn("030640615").is_err());
/// ```
pub fn validate_isbn(code: &str) -> ValidationResult<IsbnValidation> {
    let isbn = structural_isbn(code)?;

    let valid = if isbn.len() == ISBN_10_LENGTH {
        isbn10_weighted_sum(&isbn) % 11 == 0
    } else {
        isbn13_weighted_sum(&isbn) % 10 == 0
    };

    if !valid {
        trace!(isbn = %isbn, "ISBN checksum mismatch");
        return Ok(IsbnValidation::invalid());
    }

    Ok(isbn::isbn_parts(&isbn).map_or_else(IsbnValidation::invalid, IsbnValidation::valid))
}

/// Recomputes the check digit of a structurally valid ISBN (10 means `X`).
pub fn expected_isbn_check_digit(code: &str) -> ValidationResult<CheckDigit> {
    let isbn = structural_isbn(code)?;
    Ok(if isbn.len() == ISBN_10_LENGTH {
        isbn10_check_digit(&isbn)
    } else {
        isbn13_check_digit(&isbn)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
