//! Command outcomes and how they are rendered.

use std::fmt;

use prodcode_core::{CodeType, DetectionResult, IsbnParts};
use serde::Serialize;

use crate::error::ErrorReport;

/// Exit status for a positive answer.
pub const EXIT_POSITIVE: u8 = 0;
/// Exit status for checksum mismatch, no match or a failed conversion.
pub const EXIT_NEGATIVE: u8 = 1;
/// Exit status for malformed input.
pub const EXIT_MALFORMED: u8 = 2;

/// The outcome of one CLI command.
///
/// ```json
/// { "status": "validated", "type": "EAN", "code": "5901234123457", "valid": true, "isbnParts": null }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    Detected {
        label: String,
        detection: DetectionResult,
    },
    Validated {
        #[serde(rename = "type")]
        code_type: CodeType,
        code: String,
        valid: bool,
        #[serde(rename = "isbnParts")]
        isbn_parts: Option<IsbnParts>,
    },
    Converted {
        from: CodeType,
        to: CodeType,
        input: String,
        output: String,
    },
    Failed {
        error: ErrorReport,
    },
}

impl Report {
    pub fn detected(detection: DetectionResult) -> Self {
        Report::Detected {
            label: detection.label(),
            detection,
        }
    }

    pub fn failed(error: impl Into<ErrorReport>) -> Self {
        Report::Failed {
            error: error.into(),
        }
    }

    pub fn exit_status(&self) -> u8 {
        match self {
            Report::Detected { .. } | Report::Converted { .. } => EXIT_POSITIVE,
            Report::Validated { valid: true, .. } => EXIT_POSITIVE,
            Report::Validated { valid: false, .. } => EXIT_NEGATIVE,
            Report::Failed { error } if error.malformed => EXIT_MALFORMED,
            Report::Failed { .. } => EXIT_NEGATIVE,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Report::Failed { .. })
    }
}

fn write_isbn_parts(f: &mut fmt::Formatter<'_>, parts: &IsbnParts) -> fmt::Result {
    write!(f, "\n  ")?;
    if let Some(ean) = &parts.ean {
        write!(f, "ean {} | ", ean)?;
    }
    write!(
        f,
        "group {} | publisher {} | title {} | check {}",
        parts.group, parts.publisher, parts.title, parts.check_digit
    )
}

/// Text rendering, one result per line with indented details.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Detected { label, detection } => {
                write!(
                    f,
                    "{}: {} (check digit {})",
                    label, detection.code, detection.check_digit
                )?;
                if let Some(expanded) = &detection.expanded {
                    write!(f, "\n  expanded: {}", expanded)?;
                }
                if let Some(parts) = &detection.isbn_parts {
                    write_isbn_parts(f, parts)?;
                }
                Ok(())
            }
            Report::Validated {
                code_type,
                code,
                valid,
                isbn_parts,
            } => {
                let verdict = if *valid { "valid" } else { "invalid" };
                write!(f, "{} {}: {}", code_type, code, verdict)?;
                if let Some(parts) = isbn_parts {
                    write_isbn_parts(f, parts)?;
                }
                Ok(())
            }
            Report::Converted { output, .. } => write!(f, "{}", output),
            Report::Failed { error } => write!(f, "error [{}]: {}", error.code_label(), error.message),
        }
    }
}
