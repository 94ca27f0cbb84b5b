//! Property and example tests across the public API.
//!
//! The documented UPC-E pairs, detector priority and validator laws that
//! hold for every input of the right shape.

use prodcode_core::{
    check_digit::{isbn10_check_digit, upc_check_digit},
    detect_product_code, expand_upc_e, suppress_upc_a, validate_ean, validate_isbn,
    validate_upc, validate_upc_e, CodeType, ErrorKind,
};
use proptest::prelude::*;

const DOCUMENTED_PAIRS: [(&str, &str); 4] = [
    ("023456000073", "02345673"),
    ("023450000017", "02345147"),
    ("063200009716", "06397126"),
    ("086700000939", "08679339"),
];

#[test]
fn test_documented_pairs_round_trip() {
    for (upc_a, upc_e) in DOCUMENTED_PAIRS {
        assert_eq!(suppress_upc_a(upc_a).unwrap(), upc_e, "suppress {}", upc_a);
        assert_eq!(expand_upc_e(upc_e).unwrap(), upc_a, "expand {}", upc_e);
        assert_eq!(validate_upc(upc_a), Ok(true));
        assert_eq!(validate_upc_e(upc_e), Ok(true));
    }
}

#[test]
fn test_isbn_examples() {
    assert!(validate_isbn("0306406152").unwrap().valid);
    assert!(validate_isbn("9780306406157").unwrap().valid);
    assert!(!validate_isbn("9780306406156").unwrap().valid);
    assert!(!validate_isbn("9780306406158").unwrap().valid);
}

#[test]
fn test_detect_examples() {
    let result = detect_product_code("748196000441").unwrap();
    assert_eq!(result.code_type, CodeType::UpcA);
    assert_eq!(result.check_digit.value(), 1);

    assert_eq!(detect_product_code("10055564").unwrap().label(), "UPC-E - 8");
    assert_eq!(detect_product_code("9780306406157").unwrap().code_type, CodeType::Ean);
}

/// Eleven digits shaped to hit one of the four suppression conditions.
fn suppressible_body() -> impl Strategy<Value = String> {
    prop_oneof![
        ("[0-9]{5}", "[1-9]", "[5-9]").prop_map(|(a, b, c)| format!("{a}{b}0000{c}")),
        ("[0-9]{4}", "[1-9]", "[0-9]").prop_map(|(a, b, c)| format!("{a}{b}00000{c}")),
        ("[0-9]{3}", "[0-2]", "[0-9]{3}").prop_map(|(a, b, c)| format!("{a}{b}0000{c}")),
        ("[0-9]{3}", "[3-9]", "[0-9]{2}").prop_map(|(a, b, c)| format!("{a}{b}00000{c}")),
    ]
}

proptest! {
    #[test]
    fn upc_valid_iff_last_digit_matches(code in "[0-9]{12}") {
        let last = code.as_bytes()[11] - b'0';
        let expected = upc_check_digit(&code[..11]).value() == last;
        prop_assert_eq!(validate_upc(&code), Ok(expected));
    }

    #[test]
    fn suppressible_upc_a_round_trips(body in suppressible_body()) {
        let upc_a = format!("{}{}", body, upc_check_digit(&body));
        prop_assert_eq!(validate_upc(&upc_a), Ok(true));

        let upc_e = suppress_upc_a(&upc_a).unwrap();
        prop_assert_eq!(upc_e.len(), 8);
        prop_assert_eq!(expand_upc_e(&upc_e).unwrap(), upc_a);
        prop_assert_eq!(validate_upc_e(&upc_e), Ok(true));
    }

    #[test]
    fn ean_rejects_12_and_14_digits(short in "[0-9]{12}", long in "[0-9]{14}") {
        prop_assert_eq!(validate_ean(&short).unwrap_err().kind(), ErrorKind::InvalidLength);
        prop_assert_eq!(validate_ean(&long).unwrap_err().kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn isbn10_with_computed_check_digit_is_valid(body in "[0-9]{9}") {
        let isbn = format!("{}{}", body, isbn10_check_digit(&body).as_char());
        let result = validate_isbn(&isbn).unwrap();
        prop_assert!(result.valid);
        prop_assert_eq!(result.parts.unwrap().check_digit.len(), 1);
    }

    #[test]
    fn validators_are_idempotent_and_total(code in "\\PC{0,16}") {
        prop_assert_eq!(validate_upc(&code), validate_upc(&code));
        prop_assert_eq!(validate_upc_e(&code), validate_upc_e(&code));
        prop_assert_eq!(validate_ean(&code), validate_ean(&code));
        prop_assert_eq!(validate_isbn(&code), validate_isbn(&code));
        prop_assert_eq!(detect_product_code(&code), detect_product_code(&code));
    }
}
