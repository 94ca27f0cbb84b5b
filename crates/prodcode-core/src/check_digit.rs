//! # Check Digit Algorithms
//!
//! The four check digit formulas, kept apart so that one format's weights
//! can never leak into another's.
//!
//! ## Formulas
//! ```text
//! ┌──────────┬──────────────────────────────────────┬──────────────────────┐
//! │ Format   │ Weighted sum                         │ Check / validity     │
//! ├──────────┼──────────────────────────────────────┼──────────────────────┤
//! │ UPC-A/E  │ 3 × odd positions + even positions   │ (10 - sum % 10) % 10 │
//! │          │ (1-based, first 11 digits)           │                      │
//! │ EAN-13   │ odd positions + 3 × even positions   │ ⌈sum/10⌉·10 - sum    │
//! │          │ (1-based, first 12 digits)           │                      │
//! │ ISBN-10  │ Σ (10 - i) · d[i], X = 10            │ sum % 11 == 0        │
//! │ ISBN-13  │ even indices × 1, odd indices × 3    │ sum % 10 == 0        │
//! │          │ (0-based, all 13 incl. check)        │                      │
//! └──────────┴──────────────────────────────────────┴──────────────────────┘
//! ```
//!
//! ## Preconditions
//! Every function here expects input whose length and alphabet have already
//! been checked by [`crate::validation`]. A non-digit character counts as 0
//! rather than panicking.
//!
//! A residue of 0 always yields check digit 0, never 10.

use crate::types::CheckDigit;

/// Numeric value of one code character. `X`/`x` is 10 (ISBN-10 only).
#[inline]
fn char_value(c: char) -> u32 {
    match c {
        'X' | 'x' => 10,
        _ => c.to_digit(10).unwrap_or(0),
    }
}

/// Sums digits at 1-based odd and even positions over the first `take`
/// characters. Returns `(odd_sum, even_sum)`.
fn positional_sums(code: &str, take: usize) -> (u32, u32) {
    code.chars()
        .take(take)
        .enumerate()
        .fold((0, 0), |(odd, even), (index, c)| {
            // index 0 is position 1
            if index % 2 == 0 {
                (odd + char_value(c), even)
            } else {
                (odd, even + char_value(c))
            }
        })
}

// =============================================================================
// UPC
// =============================================================================

/// Computes the UPC-A check digit from the first 11 digits.
///
/// Also used for UPC-E, always on its expanded 12-digit form.
///
/// ## Example
/// ```rust
/// use prodcode_core::check_digit::upc_check_digit;
///
/// assert_eq!(upc_check_digit("74819600044").value(), 1);
/// // The 12th digit, if present, is ignored
/// assert_eq!(upc_check_digit("748196000441").value(), 1);
/// ```
pub fn upc_check_digit(code: &str) -> CheckDigit {
    let (odd_sum, even_sum) = positional_sums(code, 11);
    let total = even_sum + 3 * odd_sum;
    CheckDigit::from_residue((10 - total % 10) % 10)
}

// =============================================================================
// EAN
// =============================================================================

/// Computes the EAN-13 check digit from the first 12 digits.
///
/// ## Example
/// ```rust
/// use prodcode_core::check_digit::ean_check_digit;
///
/// assert_eq!(ean_check_digit("590123412345").value(), 7);
/// ```
pub fn ean_check_digit(code: &str) -> CheckDigit {
    let (odd_sum, even_sum) = positional_sums(code, 12);
    let total = 3 * even_sum + odd_sum;
    CheckDigit::from_residue(total.div_ceil(10) * 10 - total)
}

// =============================================================================
// ISBN
// =============================================================================

/// ISBN-10 weighted sum `Σ (10 - i) · d[i]` over the first 10 characters.
///
/// The ISBN is valid iff the result is divisible by 11.
pub fn isbn10_weighted_sum(code: &str) -> u32 {
    code.chars()
        .take(10)
        .enumerate()
        .map(|(i, c)| (10 - i as u32) * char_value(c))
        .sum()
}

/// ISBN-13 weighted sum over all 13 characters, check digit included.
///
/// The ISBN is valid iff the result is divisible by 10.
pub fn isbn13_weighted_sum(code: &str) -> u32 {
    isbn13_sum(code, 13)
}

fn isbn13_sum(code: &str, take: usize) -> u32 {
    code.chars()
        .take(take)
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { char_value(c) } else { 3 * char_value(c) })
        .sum()
}

/// Computes the ISBN-10 check digit from the first 9 digits (10 means `X`).
///
/// ## Example
/// ```rust
/// use prodcode_core::check_digit::isbn10_check_digit;
///
/// assert_eq!(isbn10_check_digit("030640615").to_string(), "2");
/// assert_eq!(isbn10_check_digit("080442957").to_string(), "X");
/// ```
pub fn isbn10_check_digit(code: &str) -> CheckDigit {
    let partial = isbn10_weighted_sum(&code.chars().take(9).collect::<String>());
    CheckDigit::from_residue((11 - partial % 11) % 11)
}

/// Computes the ISBN-13 check digit from the first 12 digits.
pub fn isbn13_check_digit(code: &str) -> CheckDigit {
    let partial = isbn13_sum(code, 12);
    CheckDigit::from_residue((10 - partial % 10) % 10)
}

// =============================================================================
// Unit Tests
// =============================================================================
