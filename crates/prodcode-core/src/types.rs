//! # Domain Types
//!
//! Value types used throughout prodcode.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CodeType     │   │   CheckDigit    │   │   IsbnParts     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  UPC-A          │   │  0..=9          │   │  ean (13 only)  │       │
//! │  │  UPC-E          │   │  10 shown "X"   │   │  group          │       │
//! │  │  EAN            │   │  (ISBN-10 only) │   │  publisher      │       │
//! │  │  ISBN           │   └─────────────────┘   │  title          │       │
//! │  └─────────────────┘                         │  check_digit    │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  DetectionResult { type, code, checkDigit, isbnParts, ... } │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every type here is immutable once built and lives for a single call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CheckDigitOutOfRange, UnknownCodeType};

// =============================================================================
// Code Type
// =============================================================================

/// The product code families this crate recognizes.
///
/// Declaration order is detection priority: UPC-A wins over UPC-E, which
/// wins over EAN, which wins over ISBN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CodeType {
    /// 12-digit Universal Product Code.
    #[serde(rename = "UPC-A")]
    UpcA,
    /// Zero-suppressed 6/7/8-digit UPC.
    #[serde(rename = "UPC-E")]
    UpcE,
    /// 13-digit European Article Number.
    #[serde(rename = "EAN")]
    Ean,
    /// ISBN-10 or ISBN-13.
    #[serde(rename = "ISBN")]
    Isbn,
}

impl CodeType {
    /// All code types in detection priority order.
    pub const ALL: [CodeType; 4] = [
        CodeType::UpcA,
        CodeType::UpcE,
        CodeType::Ean,
        CodeType::Isbn,
    ];

    /// Display label, e.g. `"UPC-A"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CodeType::UpcA => "UPC-A",
            CodeType::UpcE => "UPC-E",
            CodeType::Ean => "EAN",
            CodeType::Isbn => "ISBN",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeType {
    type Err = UnknownCodeType;

    /// Parses the labels a person would type: `upc-a`, `upca`, `upc`,
    /// `upc-e`, `upce`, `ean`, `ean-13`, `ean13`, `isbn` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upc-a" | "upca" | "upc" => Ok(CodeType::UpcA),
            "upc-e" | "upce" => Ok(CodeType::UpcE),
            "ean" | "ean-13" | "ean13" => Ok(CodeType::Ean),
            "isbn" => Ok(CodeType::Isbn),
            _ => Err(UnknownCodeType(s.to_string())),
        }
    }
}

// =============================================================================
// Check Digit
// =============================================================================

/// A single check digit.
///
/// ## Range
/// `0..=9` for every format, plus `10` for ISBN-10, which prints as `X`.
/// It is always derived from the digits before it and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "u8")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// The ISBN-10 check value written as `X`.
    pub const TEN: CheckDigit = CheckDigit(10);

    /// Creates a check digit, rejecting values above 10.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 10 {
            Some(CheckDigit(value))
        } else {
            None
        }
    }

    /// Internal constructor for values already reduced modulo 10 or 11.
    #[inline]
    pub(crate) const fn from_residue(value: u32) -> Self {
        CheckDigit(value as u8)
    }

    /// Reads a check digit from its printed form (`'0'..='9'` or `'X'`/`'x'`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(CheckDigit::TEN),
            _ => c.to_digit(10).map(|d| CheckDigit(d as u8)),
        }
    }

    /// Returns the numeric value (10 for `X`).
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the printed form.
    pub fn as_char(&self) -> char {
        if self.0 == 10 {
            'X'
        } else {
            char::from(b'0' + self.0)
        }
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = CheckDigitOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CheckDigit::new(value).ok_or(CheckDigitOutOfRange(value))
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// ISBN Parts
// =============================================================================

/// The fixed-width decomposition of a validated ISBN.
///
/// ## Layout
/// ```text
/// ISBN-10:       0 3 | 0 6 4 0 | 6 1 5 | 2
///                group  publisher  title  check
///
/// ISBN-13: 9 7 8 | 0 3 | 0 6 4 0 | 6 1 5 | 7
///          ean     group  publisher  title  check
/// ```
///
/// Real ISBNs use variable-width registrant ranges; these slices are the
/// simplified fixed widths callers already rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IsbnParts {
    /// EAN prefix (`978`/`979`). Only present for ISBN-13.
    pub ean: Option<String>,
    /// Registration group.
    pub group: String,
    /// Publisher (registrant).
    pub publisher: String,
    /// Title (publication element).
    pub title: String,
    /// The check digit exactly as written (`X` possible for ISBN-10).
    pub check_digit: String,
}

impl IsbnParts {
    /// Whether these parts came from an ISBN-13.
    #[inline]
    pub fn is_isbn13(&self) -> bool {
        self.ean.is_some()
    }
}

/// Outcome of ISBN validation: a checksum verdict plus the parts when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IsbnValidation {
    pub valid: bool,
    /// Populated only when `valid` is true.
    pub parts: Option<IsbnParts>,
}

impl IsbnValidation {
    pub(crate) fn valid(parts: IsbnParts) -> Self {
        IsbnValidation {
            valid: true,
            parts: Some(parts),
        }
    }

    pub(crate) fn invalid() -> Self {
        IsbnValidation {
            valid: false,
            parts: None,
        }
    }
}

// =============================================================================
// Detection Result
// =============================================================================

/// What the detector concluded about a code.
///
/// ## Serialization
/// ```json
/// {
///   "type": "UPC-E",
///   "code": "02345673",
///   "checkDigit": 3,
///   "isbnParts": null,
///   "expanded": "023456000073"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Winning format.
    #[serde(rename = "type")]
    pub code_type: CodeType,

    /// The input after trimming (and, for ISBN, separator stripping).
    pub code: String,

    /// Check digit recomputed for the winning format.
    pub check_digit: CheckDigit,

    /// ISBN decomposition. `None` unless `code_type` is ISBN.
    pub isbn_parts: Option<IsbnParts>,

    /// The 12-digit UPC-A form. `None` unless `code_type` is UPC-E.
    pub expanded: Option<String>,
}

impl DetectionResult {
    /// Label in the `"UPC-E - 8"` style, which includes the input length
    /// for UPC-E since the same product can be written three ways.
    pub fn label(&self) -> String {
        match self.code_type {
            CodeType::UpcE => format!("{} - {}", self.code_type, self.code.len()),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_type_priority_order() {
        assert_eq!(
            CodeType::ALL,
            [CodeType::UpcA, CodeType::UpcE, CodeType::Ean, CodeType::Isbn]
        );
    }

    #[test]
    fn test_code_type_from_str() {
        assert_eq!("UPC-A".parse::<CodeType>().unwrap(), CodeType::UpcA);
        assert_eq!("upce".parse::<CodeType>().unwrap(), CodeType::UpcE);
        assert_eq!(" ean13 ".parse::<CodeType>().unwrap(), CodeType::Ean);
        assert_eq!("Isbn".parse::<CodeType>().unwrap(), CodeType::Isbn);
        assert!("qr".parse::<CodeType>().is_err());
    }

    #[test]
    fn test_code_type_serializes_as_label() {
        let json = serde_json::to_string(&CodeType::UpcE).unwrap();
        assert_eq!(json, "\"UPC-E\"");
        let back: CodeType = serde_json::from_str("\"EAN\"").unwrap();
        assert_eq!(back, CodeType::Ean);
    }

    #[test]
    fn test_check_digit_x() {
        assert_eq!(CheckDigit::from_char('x'), Some(CheckDigit::TEN));
        assert_eq!(CheckDigit::TEN.to_string(), "X");
        assert_eq!(CheckDigit::new(7).unwrap().as_char(), '7');
        assert_eq!(CheckDigit::new(11), None);
        assert_eq!(CheckDigit::from_char('-'), None);
    }

    #[test]
    fn test_check_digit_deserialization_enforces_range() {
        let digit: CheckDigit = serde_json::from_str("10").unwrap();
        assert_eq!(digit, CheckDigit::TEN);
        assert_eq!(serde_json::from_str::<CheckDigit>("7").unwrap().value(), 7);

        assert!(serde_json::from_str::<CheckDigit>("11").is_err());
        assert!(serde_json::from_str::<CheckDigit>("250").is_err());
        assert_eq!(CheckDigit::try_from(250), Err(CheckDigitOutOfRange(250)));

        let json = r#"{"type":"UPC-A","code":"748196000441","checkDigit":250,"isbnParts":null,"expanded":null}"#;
        assert!(serde_json::from_str::<DetectionResult>(json).is_err());
    }

    #[test]
    fn test_detection_result_label() {
        let result = DetectionResult {
            code_type: CodeType::UpcE,
            code: "02345673".to_string(),
            check_digit: CheckDigit::new(3).unwrap(),
            isbn_parts: None,
            expanded: Some("023456000073".to_string()),
        };
        assert_eq!(result.label(), "UPC-E - 8");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "UPC-E");
        assert_eq!(json["checkDigit"], 3);
        assert_eq!(json["expanded"], "023456000073");
        assert!(json["isbnParts"].is_null());
    }
}
