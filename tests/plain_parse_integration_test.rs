/// Integration tests for the plain number profile
///
/// These tests run the full normalize → tokenize → parse pipeline through
/// the public entry point.
use numerizer::{parse, ErrorKind, NumerizerError};

const UNITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

#[test]
fn test_every_unit_word() {
    for (value, word) in (1..).zip(UNITS) {
        assert_eq!(parse(word), Ok(value), "parsing {:?}", word);
    }
}

#[test]
fn test_every_teen_word() {
    for (value, word) in (10..).zip(TEENS) {
        assert_eq!(parse(word), Ok(value), "parsing {:?}", word);
    }
}

#[test]
fn test_tens_and_unit_composition() {
    assert_eq!(parse("forty five"), Ok(45));
    assert_eq!(parse("forty-five"), Ok(45));
    assert_eq!(parse("Ninety-Nine"), Ok(99));
    assert_eq!(parse("twenty"), Ok(20));
}

#[test]
fn test_comma_and_hyphen_tolerance() {
    assert_eq!(parse("four thousand, four hundred thirty-two"), Ok(4432));
    assert_eq!(parse("one million, two hundred thousand, and six"), Ok(1_200_006));
}

#[test]
fn test_scale_folding() {
    assert_eq!(parse("three thousand four hundred"), Ok(3400));
    assert_eq!(parse("three thousand and four hundred"), Ok(3400));
    assert_eq!(parse("three hundred thousand"), Ok(300_000));
    assert_eq!(
        parse("nine hundred ninety nine billion nine hundred ninety nine million nine hundred ninety nine thousand nine hundred ninety nine"),
        Ok(999_999_999_999)
    );
}

#[test]
fn test_trillion_is_the_ceiling() {
    assert_eq!(parse("seven trillion"), Ok(7_000_000_000_000));
    assert_eq!(
        parse("nine hundred ninety nine trillion"),
        Ok(999_000_000_000_000)
    );

    // No tier above trillion
    assert!(matches!(
        parse("one quadrillion"),
        Err(NumerizerError::UnknownWord { .. })
    ));
    assert!(parse("one thousand trillion").is_err());
}

#[test]
fn test_zero() {
    assert_eq!(parse("zero"), Ok(0));
    assert_eq!(parse("ZERO"), Ok(0));
    assert!(parse("zero four").is_err());
    assert!(parse("four zero").is_err());
    assert!(parse("zero hundred").is_err());
}

#[test]
fn test_misspelled_aliases() {
    assert_eq!(parse("ninteen"), Ok(19));
    assert_eq!(parse("fourty two"), Ok(42));
}

#[test]
fn test_error_scenarios() {
    let cases = [
        "",
        "a",
        "and",
        "hundred",
        "thousand",
        "zero four",
        "five three",
        "twelve seventeen",
        "five hundred hundred",
        "six thousand hundred",
        "two and three",
    ];

    for input in cases {
        assert!(parse(input).is_err(), "{:?} should not parse", input);
    }
}

#[test]
fn test_error_classification() {
    assert_eq!(parse("").unwrap_err().kind(), ErrorKind::EmptyInput);
    assert_eq!(parse("a").unwrap_err().kind(), ErrorKind::UnknownWord);
    assert_eq!(parse("five apples").unwrap_err().kind(), ErrorKind::UnknownWord);
    assert_eq!(parse("and").unwrap_err().kind(), ErrorKind::Grammar);
    assert_eq!(parse("two hundred and").unwrap_err().kind(), ErrorKind::Grammar);
}

#[test]
fn test_error_messages_name_the_tokens() {
    assert_eq!(
        parse("thousand").unwrap_err().to_string(),
        "unexpected start \"thousand\""
    );
    assert_eq!(
        parse("six thousand hundred").unwrap_err().to_string(),
        "unexpected \"hundred\" after \"thousand\""
    );
}

#[test]
fn test_plain_profile_rejects_currency_words() {
    assert!(parse("five dollars").is_err());
    assert!(parse("eleven hundred").is_err());
}
