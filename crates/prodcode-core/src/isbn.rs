//! # ISBN Helpers
//!
//! Normalization and fixed-width part extraction for ISBN-10/13.
//! Checksum arithmetic lives in [`crate::check_digit`].

use crate::types::IsbnParts;
use crate::{ISBN_10_LENGTH, ISBN_13_LENGTH};

/// Strips everything except digits and `X`/`x`, uppercasing `x`.
///
/// Hyphens, spaces and letters other than X disappear:
///
/// ```rust
/// use prodcode_core::isbn::normalize;
///
/// assert_eq!(normalize("978-0-306-40615-7"), "9780306406157");
/// assert_eq!(normalize(" 0-8044-2957-x "), "080442957X");
/// ```
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Splits a validated, normalized ISBN into its fixed-width parts.
///
/// Returns `None` when the input is not 10 or 13 characters long.
pub fn isbn_parts(isbn: &str) -> Option<IsbnParts> {
    let slice = |from: usize, to: usize| isbn.get(from..to).map(str::to_string);

    match isbn.len() {
        ISBN_10_LENGTH => Some(IsbnParts {
            ean: None,
            group: slice(0, 2)?,
            publisher: slice(2, 6)?,
            title: slice(6, 9)?,
            check_digit: slice(9, 10)?,
        }),
        ISBN_13_LENGTH => Some(IsbnParts {
            ean: Some(slice(0, 3)?),
            group: slice(3, 5)?,
            publisher: slice(5, 9)?,
            title: slice(9, 12)?,
            check_digit: slice(12, 13)?,
        }),
        _ => None,
    }
}
