//! # prodcode-core: Pure Product Code Logic
//!
//! This crate validates and normalizes retail product identification codes:
//! UPC-A, UPC-E, EAN-13 and ISBN-10/13. Everything here is a pure function
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        prodcode Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Caller (scanner input, `prodcode` CLI, till)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw digit string                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ prodcode-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌────────────┐   ┌─────────┐   ┌──────────┐  │   │
//! │  │   │  detect   │──►│ validation │──►│  upc_e  │──►│  check_  │  │   │
//! │  │   │ priority  │   │ UPC/EAN/   │   │ expand  │   │  digit   │  │   │
//! │  │   │ dispatch  │   │ ISBN/UPC-E │   │ suppress│   │ formulas │  │   │
//! │  │   └───────────┘   └─────┬──────┘   └─────────┘   └──────────┘  │   │
//! │  │                         └──► isbn (part extraction)            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`check_digit`] - The four check digit formulas
//! - [`validation`] - Per-format structural checks + checksum comparison
//! - [`upc_e`] - UPC-E ↔ UPC-A expansion and suppression
//! - [`isbn`] - ISBN normalization and part extraction
//! - [`detect`] - "What kind of code is this?" dispatcher
//! - [`types`] - Value types shared by all of the above
//! - [`error`] - Error taxonomy
//!
//! ## Two-Tier Results
//! Malformed input (wrong length, stray characters) is an `Err`.
//! A well-formed code whose check digit does not match is `Ok(false)`.
//! Callers depend on telling these apart.
//!
//! ## Example Usage
//!
//! ```rust
//! use prodcode_core::{detect_product_code, validate_upc, CodeType};
//!
//! assert_eq!(validate_upc("748196000441"), Ok(true));
//! assert_eq!(validate_upc("748196000442"), Ok(false));
//! assert!(validate_upc("74819600044").is_err()); // 11 digits: malformed
//!
//! let result = detect_product_code("748196000441").unwrap();
//! assert_eq!(result.code_type, CodeType::UpcA);
//! assert_eq!(result.check_digit.value(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod check_digit;
pub mod detect;
pub mod error;
pub mod isbn;
pub mod types;
pub mod upc_e;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use detect::{detect_product_code, Detector, DetectorConfig};
pub use error::{
    CheckDigitOutOfRange, CodeError, CodeResult, ErrorKind, ExpansionError, NoMatch,
    SuppressionError, UnknownCodeType, ValidationError,
};
pub use types::*;
pub use upc_e::{expand as expand_upc_e, suppress as suppress_upc_a};
pub use validation::{validate_ean, validate_isbn, validate_upc, validate_upc_e};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a UPC-A (GTIN-12) code, check digit included.
pub const UPC_A_LENGTH: usize = 12;

/// Accepted UPC-E input lengths.
///
/// - 6: the six significant digits only
/// - 7: body pattern selector + six significant digits
/// - 8: number system digit + six significant digits + check digit
pub const UPC_E_LENGTHS: [usize; 3] = [6, 7, 8];

/// Length of an EAN-13 code. No padding from 12 is performed.
pub const EAN_13_LENGTH: usize = 13;

/// Length of an ISBN-10 after separators are stripped.
pub const ISBN_10_LENGTH: usize = 10;

/// Length of an ISBN-13 after separators are stripped.
pub const ISBN_13_LENGTH: usize = 13;
