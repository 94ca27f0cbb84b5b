//! # Product Code Detector
//!
//! Answers "what kind of code is this?" by running every enabled validator
//! in a fixed priority order.
//!
//! ## Detection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw input ──trim──►  UPC-A ──►  UPC-E ──►  EAN ──►  ISBN ──► NoMatch   │
//! │                         │          │         │        │                 │
//! │                         ▼          ▼         ▼        ▼                 │
//! │                      first format that validates wins                   │
//! │                                                                         │
//! │  Per-format errors (wrong length, stray characters, unknown parity)     │
//! │  mean "not this format" and are logged at debug, never returned.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A 13-digit code starting with 978/979 validates as both EAN and ISBN;
//! EAN wins.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::check_digit::{ean_check_digit, upc_check_digit};
use crate::error::{NoMatch, ValidationError};
use crate::isbn;
use crate::types::{CodeType, DetectionResult};
use crate::upc_e;
use crate::validation::{
    expected_isbn_check_digit, validate_ean, validate_isbn, validate_upc, validate_upc_e,
    ValidationResult,
};

// =============================================================================
// Detector Configuration
// =============================================================================

/// Which formats the detector is allowed to answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Enabled formats. Order is irrelevant; priority is always
    /// [`CodeType::ALL`] order.
    pub enabled: Vec<CodeType>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            enabled: CodeType::ALL.to_vec(),
        }
    }
}

impl DetectorConfig {
    /// Creates a config that only detects the given formats.
    pub fn only(formats: impl IntoIterator<Item = CodeType>) -> Self {
        DetectorConfig {
            enabled: formats.into_iter().collect(),
        }
    }

    #[inline]
    pub fn is_enabled(&self, format: CodeType) -> bool {
        self.enabled.contains(&format)
    }
}

// =============================================================================
// Detector
// =============================================================================

/// Priority-ordered format detector.
///
/// ## Example
/// ```rust
/// use prodcode_core::{CodeType, Detector, DetectorConfig};
///
/// // A till that never scans books
/// let detector = Detector::new(DetectorConfig::only([CodeType::UpcA, CodeType::Ean]));
///
/// assert_eq!(detector.detect("5901234123457").unwrap().code_type, CodeType::Ean);
/// assert!(detector.detect("0306406152").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Detector { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Classifies a code, returning the first enabled format that validates.
    ///
    /// ## Errors
    /// `NoMatch` when no enabled format accepts the code.
    pub fn detect(&self, code: &str) -> Result<DetectionResult, NoMatch> {
        let code = code.trim();

        let enabled = CodeType::ALL
            .into_iter()
            .filter(|format| self.config.is_enabled(*format));

        for format in enabled {
            match evaluate(format, code) {
                Ok(Some(result)) => {
                    debug!(code = %code, format = ?format, "detected product code");
                    return Ok(result);
                }
                Ok(None) => {
                    trace!(code = %code, format = ?format, "check digit mismatch");
                }
                Err(err) => {
                    debug!(code = %code, format = ?format, error = %err, "format rejected input");
                }
            }
        }

        Err(NoMatch {
            code: code.to_string(),
        })
    }
}

/// Runs one format's validator. `Ok(None)` is a well-formed code with a
/// wrong check digit.
fn evaluate(format: CodeType, code: &str) -> ValidationResult<Option<DetectionResult>> {
    let result = match format {
        CodeType::UpcA => validate_upc(code)?.then(|| DetectionResult {
            code_type: format,
            code: code.to_string(),
            check_digit: upc_check_digit(code),
            isbn_parts: None,
            expanded: None,
        }),
        CodeType::UpcE => {
            if !validate_upc_e(code)? {
                return Ok(None);
            }
            let expanded = upc_e::expand(code).map_err(ValidationError::from)?;
            Some(DetectionResult {
                code_type: format,
                code: code.to_string(),
                check_digit: upc_check_digit(&expanded),
                isbn_parts: None,
                expanded: Some(expanded),
            })
        }
        CodeType::Ean => validate_ean(code)?.then(|| DetectionResult {
            code_type: format,
            code: code.to_string(),
            check_digit: ean_check_digit(code),
            isbn_parts: None,
            expanded: None,
        }),
        CodeType::Isbn => {
            let validation = validate_isbn(code)?;
            if !validation.valid {
                return Ok(None);
            }
            Some(DetectionResult {
                code_type: format,
                code: isbn::normalize(code),
                check_digit: expected_isbn_check_digit(code)?,
                isbn_parts: validation.parts,
                expanded: None,
            })
        }
    };

    Ok(result)
}

/// Detects with every format enabled.
///
/// ## Example
/// ```rust
/// use prodcode_core::{detect_product_code, CodeType};
///
/// let result = detect_product_code("02345673").unwrap();
/// assert_eq!(result.code_type, CodeType::UpcE);
/// assert_eq!(result.expanded.as_deref(), Some("023456000073"));
/// assert_eq!(result.label(), "UPC-E - 8");
/// ```
pub fn detect_product_code(code: &str) -> Result<DetectionResult, NoMatch> {
    Detector::default().detect(code)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckDigit;

    #[test]
    fn test_detect_upc_a() {
        let result = detect_product_code("748196000441").unwrap();
        assert_eq!(result.code_type, CodeType::UpcA);
        assert_eq!(result.check_digit.value(), 1);
        assert_eq!(result.code, "748196000441");
        assert_eq!(result.isbn_parts, None);
        assert_eq!(result.expanded, None);

        let result = detect_product_code("012800000890").unwrap();
        assert_eq!(result.code_type, CodeType::UpcA);
        assert_eq!(result.check_digit.value(), 0);
    }

    #[test]
    fn test_detect_upc_e() {
        let result = detect_product_code("02345673").unwrap();
        assert_eq!(result.code_type, CodeType::UpcE);
        assert_eq!(result.check_digit.value(), 3);
        assert_eq!(result.expanded.as_deref(), Some("023456000073"));

        let result = detect_product_code("654321").unwrap();
        assert_eq!(result.code_type, CodeType::UpcE);
        assert_eq!(result.label(), "UPC-E - 6");
        assert_eq!(result.expanded.as_deref(), Some("065100004327"));
    }

    #[test]
    fn test_detect_ean() {
        let result = detect_product_code("5901234123457").unwrap();
        assert_eq!(result.code_type, CodeType::Ean);
        assert_eq!(result.check_digit.value(), 7);
    }

    #[test]
    fn test_detect_prefers_ean_over_isbn() {
        let result = detect_product_code("9780306406157").unwrap();
        assert_eq!(result.code_type, CodeType::Ean);
        assert_eq!(result.isbn_parts, None);
    }

    #[test]
    fn test_detect_isbn() {
        let result = detect_product_code("0306406152").unwrap();
        assert_eq!(result.code_type, CodeType::Isbn);
        assert_eq!(result.check_digit.value(), 2);
        assert_eq!(result.isbn_parts.unwrap().publisher, "0640");

        // Hyphens rule out every other format
        let result = detect_product_code("978-0-306-40615-7").unwrap();
        assert_eq!(result.code_type, CodeType::Isbn);
        assert_eq!(result.code, "9780306406157");
        assert_eq!(result.check_digit.value(), 7);

        let result = detect_product_code("080442957X").unwrap();
        assert_eq!(result.check_digit, CheckDigit::TEN);
    }

    #[test]
    fn test_detect_no_match() {
        for code in ["hello", "", "748196000442", "12345"] {
            assert_eq!(
                detect_product_code(code),
                Err(NoMatch {
                    code: code.to_string()
                })
            );
        }
    }

    #[test]
    fn test_detect_trims_input() {
        let result = detect_product_code("  748196000441\n").unwrap();
        assert_eq!(result.code, "748196000441");
    }

    #[test]
    fn test_detector_skips_disabled_formats() {
        let detector = Detector::new(DetectorConfig::only([CodeType::Ean, CodeType::Isbn]));
        assert!(detector.detect("748196000441").is_err());

        let detector = Detector::new(DetectorConfig::only([CodeType::Isbn]));
        let result = detector.detect("9780306406157").unwrap();
        assert_eq!(result.code_type, CodeType::Isbn);
        assert_eq!(result.isbn_parts.unwrap().ean.as_deref(), Some("978"));
    }

    #[test]
    fn test_detector_config_default_enables_all() {
        let config = DetectorConfig::default();
        for format in CodeType::ALL {
            assert!(config.is_enabled(format));
        }
        assert!(!DetectorConfig::only([]).is_enabled(CodeType::UpcA));
    }

    #[test]
    fn test_detection_result_serialization() {
        let result = detect_product_code("02345673").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "UPC-E");
        assert_eq!(json["checkDigit"], 3);
        assert_eq!(json["expanded"], "023456000073");
        assert!(json["isbnParts"].is_null());
    }
}
