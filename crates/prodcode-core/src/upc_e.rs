//! # UPC-E Codec
//!
//! Converts between zero-suppressed UPC-E and its 12-digit UPC-A form.
//!
//! ## Expansion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input length                                                           │
//! │                                                                         │
//! │  6: d1..d6            parity bit + check digit from the parity table    │
//! │  7: P d1..d6          P selects the body; parity bit + check digit      │
//! │                       from the parity table                             │
//! │  8: S d1..d6 C        S leads; UPC-A check digit recomputed from body   │
//! │                                                                         │
//! │  Body (10 digits) for 6 and 8 digits, chosen by d6:                     │
//! │    0,1,2  →  d1 d2 d6 0 0 0 0 d3 d4 d5                                  │
//! │    3      →  d1 d2 d3 0 0 0 0 0 d4 d5                                   │
//! │    4      →  d1 d2 d3 d4 0 0 0 0 0 d5                                   │
//! │    5..9   →  d1 d2 d3 d4 d5 0 0 0 0 d6                                  │
//! │                                                                         │
//! │  Body for 7 digits, chosen by P:                                        │
//! │    0,1,2  →  d1 d2 P 0 0 0 0 d3 d4 d5                                   │
//! │    3      →  d1 d2 d3 0 0 0 0 0 d4 d5                                   │
//! │    4      →  d1 d2 d3 d4 d5 0 0 0 0 d6                                  │
//! │    5..9   →  d1 d2 d3 d4 d5 0 0 0 0 P                                   │
//! │                                                                         │
//! │  UPC-A = parity/system digit + body + check digit                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Suppression
//! Four conditions over the 0-indexed UPC-A digits `p0..p11`, tried in order:
//!
//! | Cond | Requires                              | UPC-E                       |
//! |------|---------------------------------------|-----------------------------|
//! | A    | p10 ∈ 5..9, p5 ≠ 0, p6..p9 = 0        | p0..p5 p10 p11              |
//! | B    | p4 ≠ 0, p5..p9 = 0                    | p0..p4 p10 `4` p11          |
//! | C    | p3 ∈ 0..2, p4..p7 = 0                 | p0..p2 p8 p9 p10 p3 p11     |
//! | D    | p3 ∈ 3..9, p4..p8 = 0                 | p0..p3 p9 p10 `3` p11       |
//!
//! Every suppressed code expands back to the UPC-A it came from.

use tracing::trace;

use crate::check_digit::upc_check_digit;
use crate::error::{ExpansionError, SuppressionError};
use crate::types::CheckDigit;
use crate::UPC_A_LENGTH;

// =============================================================================
// Parity Table
// =============================================================================

/// Even/odd patterns indexed by UPC-E check digit, then by parity bit.
///
/// `E` marks an even digit, `O` an odd one, over the six significant digits.
static PARITY_TABLE: [[&str; 2]; 10] = [
    ["EEEOOO", "OOOEEE"],
    ["EEOEOO", "OOEOEE"],
    ["EEOOEO", "OOEEOE"],
    ["EEOOOE", "OOEEEO"],
    ["EOEEOO", "OEOOEE"],
    ["EOOEEO", "OEEOOE"],
    ["EOOOEE", "OEEEOO"],
    ["EOEOEO", "OEOEOE"],
    ["EOEOOE", "OEOEEO"],
    ["EOOEOE", "OEEOEO"],
];

/// Parity bit and check digit recovered from a six-digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parity {
    /// 0 or 1; becomes the leading UPC-A digit.
    pub parity_bit: u8,
    /// The UPC-E check digit, appended to the expanded code.
    pub check_digit: CheckDigit,
}

/// Even/odd pattern of the first six digits, e.g. `"EOEOEO"` for `"654321"`.
pub fn parity_pattern(digits: &str) -> String {
    digits
        .chars()
        .take(6)
        .map(|c| match c.to_digit(10) {
            Some(d) if d % 2 == 0 => 'E',
            _ => 'O',
        })
        .collect()
}

/// Looks up the pattern stored for a check digit and parity bit.
///
/// This is the reverse direction of [`get_parity`].
pub fn parity_pattern_for(check_digit: u8, parity_bit: u8) -> Option<&'static str> {
    PARITY_TABLE
        .get(usize::from(check_digit))?
        .get(usize::from(parity_bit))
        .copied()
}

/// Resolves the parity bit and check digit for six significant digits.
///
/// ## Errors
/// `NoParityMatch` when the pattern is none of the 20 in the table.
///
/// ## Example
/// ```rust
/// use prodcode_core::upc_e::get_parity;
///
/// let parity = get_parity("654321").unwrap(); // EOEOEO
/// assert_eq!(parity.parity_bit, 0);
/// assert_eq!(parity.check_digit.value(), 7);
///
/// assert!(get_parity("222222").is_err()); // EEEEEE
/// ```
pub fn get_parity(digits: &str) -> Result<Parity, ExpansionError> {
    let pattern = parity_pattern(digits);

    PARITY_TABLE
        .iter()
        .enumerate()
        .find_map(|(check, patterns)| {
            patterns
                .iter()
                .position(|candidate| *candidate == pattern)
                .map(|bit| Parity {
                    parity_bit: bit as u8,
                    check_digit: CheckDigit::from_residue(check as u32),
                })
        })
        .ok_or(ExpansionError::NoParityMatch { pattern })
}

// =============================================================================
// Expansion
// =============================================================================

/// Expands a 6, 7 or 8 digit UPC-E code to its 12-digit UPC-A form.
///
/// Surrounding whitespace is ignored.
///
/// ## Errors
/// - `NonNumeric` for anything other than ASCII digits
/// - `ExpansionFailed` when the length is not 6, 7 or 8
/// - `NoParityMatch` when a 6/7-digit code's pattern is not in the table
///
/// A 7-digit code's leading digit is a pattern selector, not the UPC-A
/// number system digit.
///
/// ## Example
/// ```rust
/// use prodcode_core::expand_upc_e;
///
/// assert_eq!(expand_upc_e("02345673").unwrap(), "023456000073");
/// assert_eq!(expand_upc_e("654321").unwrap(), "065100004327");
/// assert!(expand_upc_e("12345").is_err());
/// ```
pub fn expand(code: &str) -> Result<String, ExpansionError> {
    let code = code.trim();

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ExpansionError::NonNumeric {
            code: code.to_string(),
        });
    }

    let expanded = match code.len() {
        6 => {
            let parity = get_parity(code)?;
            format!(
                "{}{}{}",
                parity.parity_bit,
                expanded_body(code),
                parity.check_digit
            )
        }
        7 => {
            let (selector, digits) = code.split_at(1);
            let parity = get_parity(digits)?;
            format!(
                "{}{}{}",
                parity.parity_bit,
                selected_body(digits, selector.as_bytes()[0]),
                parity.check_digit
            )
        }
        8 => {
            let body = format!("{}{}", &code[0..1], expanded_body(&code[1..7]));
            let check_digit = upc_check_digit(&body);
            format!("{}{}", body, check_digit)
        }
        length => {
            return Err(ExpansionError::ExpansionFailed {
                code: code.to_string(),
                length,
            })
        }
    };

    trace!(upc_e = %code, upc_a = %expanded, "expanded UPC-E");
    Ok(expanded)
}

/// The 10 digits between the leading digit and the check digit.
///
/// `digits` must be exactly six ASCII digits.
fn expanded_body(digits: &str) -> String {
    match digits.as_bytes()[5] {
        b'0'..=b'2' => format!("{}{}0000{}", &digits[0..2], &digits[5..6], &digits[2..5]),
        b'3' => format!("{}00000{}", &digits[0..3], &digits[3..5]),
        b'4' => format!("{}00000{}", &digits[0..4], &digits[4..5]),
        _ => format!("{}0000{}", &digits[0..5], &digits[5..6]),
    }
}

/// The 10-digit body of a 7-digit UPC-E, chosen by its leading selector.
///
/// `digits` must be exactly six ASCII digits, `selector` an ASCII digit.
fn selected_body(digits: &str, selector: u8) -> String {
    let selector = char::from(selector);
    match selector {
        '0'..='2' => format!("{}{}0000{}", &digits[0..2], selector, &digits[2..5]),
        '3' => format!("{}00000{}", &digits[0..3], &digits[3..5]),
        '4' => format!("{}0000{}", &digits[0..5], &digits[5..6]),
        _ => format!("{}0000{}", &digits[0..5], selector),
    }
}

// =============================================================================
// Suppression
// =============================================================================

/// Compresses a 12-digit UPC-A to its 8-digit UPC-E form.
///
/// The check digit is carried over unchanged; no checksum is verified here.
///
/// ## Errors
/// - `InvalidLength` unless exactly 12 characters
/// - `NonNumeric` for anything other than ASCII digits
/// - `SuppressionFailed` when none of conditions A-D match
///
/// ## Example
/// ```rust
/// use prodcode_core::suppress_upc_a;
///
/// assert_eq!(suppress_upc_a("023456000073").unwrap(), "02345673"); // A
/// assert_eq!(suppress_upc_a("023450000017").unwrap(), "02345147"); // B
/// assert_eq!(suppress_upc_a("063200009716").unwrap(), "06397126"); // C
/// assert_eq!(suppress_upc_a("086700000939").unwrap(), "08679339"); // D
/// assert!(suppress_upc_a("748196000441").is_err());
/// ```
pub fn suppress(code: &str) -> Result<String, SuppressionError> {
    let code = code.trim();

    let length = code.chars().count();
    if length != UPC_A_LENGTH {
        return Err(SuppressionError::InvalidLength {
            code: code.to_string(),
            length,
        });
    }

    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(SuppressionError::NonNumeric {
            code: code.to_string(),
        });
    }

    let mut p = [0u8; UPC_A_LENGTH];
    for (slot, byte) in p.iter_mut().zip(code.bytes()) {
        *slot = byte - b'0';
    }

    let suppressed = [
        ("A", condition_a(&p)),
        ("B", condition_b(&p)),
        ("C", condition_c(&p)),
        ("D", condition_d(&p)),
    ]
    .into_iter()
    .find_map(|(name, digits)| digits.map(|d| (name, render(&d))));

    match suppressed {
        Some((condition, upc_e)) => {
            trace!(upc_a = %code, upc_e = %upc_e, condition, "suppressed UPC-A");
            Ok(upc_e)
        }
        None => Err(SuppressionError::SuppressionFailed {
            code: code.to_string(),
        }),
    }
}

fn all_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Manufacturer ends in a non-zero digit, product is 5..9.
fn condition_a(p: &[u8; 12]) -> Option<Vec<u8>> {
    ((5..=9).contains(&p[10]) && p[5] != 0 && all_zero(&p[6..10]))
        .then(|| [&p[0..6], &[p[10], p[11]][..]].concat())
}

/// Manufacturer ends in a non-zero digit followed by five zeros.
fn condition_b(p: &[u8; 12]) -> Option<Vec<u8>> {
    (p[4] != 0 && all_zero(&p[5..10])).then(|| [&p[0..5], &[p[10], 4, p[11]][..]].concat())
}

/// Manufacturer's third digit is 0-2, followed by four zeros.
fn condition_c(p: &[u8; 12]) -> Option<Vec<u8>> {
    (p[3] <= 2 && all_zero(&p[4..8])).then(|| [&p[0..3], &p[8..11], &[p[3], p[11]][..]].concat())
}

/// Manufacturer's third digit is 3-9, followed by five zeros.
fn condition_d(p: &[u8; 12]) -> Option<Vec<u8>> {
    ((3..=9).contains(&p[3]) && all_zero(&p[4..9]))
        .then(|| [&p[0..4], &p[9..11], &[3, p[11]][..]].concat())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_pattern() {
        assert_eq!(parity_pattern("654321"), "EOEOEO");
        assert_eq!(parity_pattern("000111"), "EEEOOO");
        assert_eq!(parity_pattern("135246"), "OOOEEE");
    }

    #[test]
    fn test_parity_table_is_bidirectional() {
        for check in 0..10u8 {
            for bit in 0..2u8 {
                let pattern = parity_pattern_for(check, bit).unwrap();
                // Build digits that produce this pattern: E -> 2, O -> 1
                let digits: String = pattern
                    .chars()
                    .map(|c| if c == 'E' { '2' } else { '1' })
                    .collect();
                let parity = get_parity(&digits).unwrap();
                assert_eq!(parity.check_digit.value(), check);
                assert_eq!(parity.parity_bit, bit);
            }
        }
        assert_eq!(parity_pattern_for(10, 0), None);
        assert_eq!(parity_pattern_for(0, 2), None);
    }

    #[test]
    fn test_get_parity_no_match() {
        let err = get_parity("000000").unwrap_err();
        assert_eq!(
            err,
            ExpansionError::NoParityMatch {
                pattern: "EEEEEE".to_string()
            }
        );
    }

    #[test]
    fn test_expanded_body_patterns() {
        assert_eq!(expanded_body("123450"), "1200000345");
        assert_eq!(expanded_body("123451"), "1210000345");
        assert_eq!(expanded_body("123452"), "1220000345");
        assert_eq!(expanded_body("123453"), "1230000045");
        assert_eq!(expanded_body("123454"), "1234000005");
        assert_eq!(expanded_body("123455"), "1234500005");
        assert_eq!(expanded_body("123459"), "1234500009");
    }

    #[test]
    fn test_expand_six_digits() {
        // EOEOEO -> check 7, parity 0
        assert_eq!(expand("654321").unwrap(), "065100004327");
    }

    #[test]
    fn test_expand_six_digits_unknown_parity() {
        assert!(matches!(
            expand("222222"),
            Err(ExpansionError::NoParityMatch { .. })
        ));
    }

    #[test]
    fn test_selected_body_patterns() {
        assert_eq!(selected_body("123456", b'0'), "1200000345");
        assert_eq!(selected_body("123456", b'2'), "1220000345");
        assert_eq!(selected_body("123456", b'3'), "1230000045");
        assert_eq!(selected_body("123456", b'4'), "1234500006");
        assert_eq!(selected_body("123456", b'7'), "1234500007");
    }

    #[test]
    fn test_expand_seven_digits_selector_picks_body() {
        // 654321 is EOEOEO: parity bit 0, check 7, whatever the selector
        assert_eq!(expand("0654321").unwrap(), "065000004327");
        assert_eq!(expand("1654321").unwrap(), "065100004327");
        assert_eq!(expand("4654321").unwrap(), "065432000017");
        assert_eq!(expand("5654321").unwrap(), "065432000057");
        assert_eq!(expand("7654321").unwrap(), "065432000077");
        // 563412 is OEOEOE: parity bit 1, check 7
        assert_eq!(expand("1563412").unwrap(), "156100003417");
    }

    #[test]
    fn test_expand_seven_digits_unknown_parity() {
        assert_eq!(
            expand("5222222"),
            Err(ExpansionError::NoParityMatch {
                pattern: "EEEEEE".to_string()
            })
        );
    }

    #[test]
    fn test_expand_eight_digits_recomputes_check_digit() {
        assert_eq!(expand("02345673").unwrap(), "023456000073");
        assert_eq!(expand("10055564").unwrap(), "100555000064");
        // Supplied check digit is not copied
        assert_eq!(expand("02345670").unwrap(), "023456000073");
    }

    #[test]
    fn test_expand_rejects_bad_input() {
        assert_eq!(
            expand("12345"),
            Err(ExpansionError::ExpansionFailed {
                code: "12345".to_string(),
                length: 5
            })
        );
        assert!(matches!(
            expand("123456789"),
            Err(ExpansionError::ExpansionFailed { length: 9, .. })
        ));
        assert!(matches!(
            expand("12a456"),
            Err(ExpansionError::NonNumeric { .. })
        ));
        assert!(matches!(
            expand(""),
            Err(ExpansionError::ExpansionFailed { length: 0, .. })
        ));
    }

    #[test]
    fn test_suppress_conditions() {
        assert_eq!(suppress("023456000073").unwrap(), "02345673");
        assert_eq!(suppress("023450000017").unwrap(), "02345147");
        assert_eq!(suppress("063200009716").unwrap(), "06397126");
        assert_eq!(suppress("086700000939").unwrap(), "08679339");
    }

    #[test]
    fn test_suppress_condition_a_needs_high_product_digit() {
        // p10 = 4 fails A; p5 = 6 != 0 fails B; p4 = 5 fails C and D
        assert!(matches!(
            suppress("023456000043"),
            Err(SuppressionError::SuppressionFailed { .. })
        ));
    }

    #[test]
    fn test_suppress_rejects_bad_input() {
        assert!(matches!(
            suppress("02345600007"),
            Err(SuppressionError::InvalidLength { length: 11, .. })
        ));
        assert!(matches!(
            suppress("0234560000733"),
            Err(SuppressionError::InvalidLength { length: 13, .. })
        ));
        assert!(matches!(
            suppress("02345600007A"),
            Err(SuppressionError::NonNumeric { .. })
        ));
        assert!(matches!(
            suppress("748196000441"),
            Err(SuppressionError::SuppressionFailed { .. })
        ));
    }

    #[test]
    fn test_suppress_then_expand_round_trip() {
        for upc_a in ["023456000073", "023450000017", "063200009716", "086700000939", "100555000064"] {
            let upc_e = suppress(upc_a).unwrap();
            assert_eq!(expand(&upc_e).unwrap(), upc_a, "round trip via {}", upc_e);
        }
    }
}
