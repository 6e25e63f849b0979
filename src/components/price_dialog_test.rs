use super::*;

#[test]
fn parses_dot_decimal() {
    assert_eq!(parse_price_input("19.9"), Ok(19.9));
}

#[test]
fn parses_comma_decimal() {
    assert_eq!(parse_price_input("19,9"), Ok(19.9));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parse_price_input("  45,90  "), Ok(45.9));
}

#[test]
fn zero_is_a_valid_price() {
    assert_eq!(parse_price_input("0"), Ok(0.0));
}

#[test]
fn rejects_negative_values() {
    assert_eq!(parse_price_input("-1"), Err(INVALID_PRICE_MESSAGE));
}

#[test]
fn rejects_non_numeric_input() {
    assert_eq!(parse_price_input("abc"), Err(INVALID_PRICE_MESSAGE));
    assert_eq!(parse_price_input(""), Err(INVALID_PRICE_MESSAGE));
}
