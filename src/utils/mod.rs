use std::num::ParseIntError;

/// Converts a one or two character slice of hex digits into a byte.
pub fn from_hex(input: &str) -> Result<u8, ParseIntError> {
    u8::from_str_radix(input, 16)
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_digit(16)
}

#[test]
fn convert_full_pairs() {
    assert_eq!(from_hex("00"), Ok(0x00));
    assert_eq!(from_hex("4f"), Ok(0x4f));
    assert_eq!(from_hex("FF"), Ok(0xff));
    assert_eq!(from_hex("aB"), Ok(0xab));
}

#[test]
fn convert_single_digit() {
    assert_eq!(from_hex("f"), Ok(0x0f));
    assert_eq!(from_hex("0"), Ok(0x00));
}

#[test]
fn reject_non_hex() {
    assert_eq!(from_hex("4g").is_ok(), false);
    assert_eq!(from_hex("").is_ok(), false);
}

#[test]
fn classify_hex_digits() {
    assert_eq!(is_hex_digit('a'), true);
    assert_eq!(is_hex_digit('F'), true);
    assert_eq!(is_hex_digit('9'), true);
    assert_eq!(is_hex_digit('g'), false);
    assert_eq!(is_hex_digit('+'), false);
    assert_eq!(is_hex_digit(' '), false);
}
