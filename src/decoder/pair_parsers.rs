use nom::types::CompleteStr;

// Takes the leading hex pair, or the single character left over at the end
// of an odd-length line.
named!(pub hex_pair<CompleteStr, CompleteStr>,
    alt!(
        take!(2) | take!(1)
    )
);

#[test]
fn parse_full_pair() {
    let result = hex_pair(CompleteStr("4142"));
    assert_eq!(result.is_ok(), true);
    let (rest, pair) = result.unwrap();
    assert_eq!(pair, CompleteStr("41"));
    assert_eq!(rest, CompleteStr("42"));
}

#[test]
fn parse_leftover_character() {
    let result = hex_pair(CompleteStr("f"));
    assert_eq!(result.is_ok(), true);
    let (rest, pair) = result.unwrap();
    assert_eq!(pair, CompleteStr("f"));
    assert_eq!(rest, CompleteStr(""));
}

#[test]
fn parse_does_not_validate_digits() {
    let result = hex_pair(CompleteStr("zz00"));
    assert_eq!(result.is_ok(), true);
    let (rest, pair) = result.unwrap();
    assert_eq!(pair, CompleteStr("zz"));
    assert_eq!(rest, CompleteStr("00"));
}

#[test]
fn parse_empty_input() {
    let result = hex_pair(CompleteStr(""));
    assert_eq!(result.is_ok(), false);
}
