#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

// ── Month keys ────────────────────────────────────────────────

#[test]
fn test_month_key_is_unpadded() {
    assert_eq!(month_key("2024", 0), "2024-1");
    assert_eq!(month_key("2024", 2), "2024-3");
    assert_eq!(month_key("2024", 11), "2024-12");
}

#[test]
fn test_month_key_trims_year() {
    assert_eq!(month_key(" 2025 ", 4), "2025-5");
}

#[test]
fn test_split_month_key() {
    assert_eq!(split_month_key("2024-3"), Some((2024, 3)));
    assert_eq!(split_month_key("2024-12"), Some((2024, 12)));
    assert_eq!(split_month_key("2024-03"), None);
    assert_eq!(split_month_key("2024-13"), None);
    assert_eq!(split_month_key("2024-0"), None);
    assert_eq!(split_month_key("24-3"), None);
    assert_eq!(split_month_key("garbage"), None);
}

#[test]
fn test_month_label() {
    assert_eq!(month_label("2024-3"), "March 2024");
    assert_eq!(month_label("2023-12"), "December 2023");
    assert_eq!(month_label("2024-03"), "2024-03");
}

// ── parse_month ───────────────────────────────────────────────

#[test]
fn test_parse_month_numbers() {
    assert_eq!(parse_month("1").unwrap(), 0);
    assert_eq!(parse_month("12").unwrap(), 11);
    assert_eq!(parse_month(" 03 ").unwrap(), 2);
    assert!(parse_month("0").is_err());
    assert!(parse_month("13").is_err());
}

#[test]
fn test_parse_month_names() {
    assert_eq!(parse_month("January").unwrap(), 0);
    assert_eq!(parse_month("march").unwrap(), 2);
    assert_eq!(parse_month("SEP").unwrap(), 8);
    assert_eq!(parse_month("Sept").unwrap(), 8);
    assert!(parse_month("Ju").is_err());
    assert!(parse_month("Smarch").is_err());
    assert!(parse_month("").is_err());
}

// ── parse_year ────────────────────────────────────────────────

#[test]
fn test_parse_year() {
    assert_eq!(parse_year("2024").unwrap(), "2024");
    assert_eq!(parse_year(" 1999 ").unwrap(), "1999");
    assert!(parse_year("").is_err());
    assert!(parse_year("   ").is_err());
    assert!(parse_year("20x4").is_err());
}

#[test]
fn test_current_year_is_numeric() {
    let year = current_year();
    assert_eq!(year.len(), 4);
    assert!(parse_year(&year).is_ok());
}

// ── parse_amount / parse_limit ────────────────────────────────

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount("40").unwrap(), dec!(40));
    assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
    assert_eq!(parse_amount("1e2").unwrap(), dec!(100));
}

#[test]
fn test_parse_amount_rejects_text() {
    let err = parse_amount("abc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please enter a valid number for the amount."
    );
    assert!(parse_amount("").is_err());
}

#[test]
fn test_parse_limit_message() {
    let err = parse_limit("lots").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please enter a valid number for the threshold."
    );
    assert_eq!(parse_limit("0").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_rejects_huge_values() {
    let err = parse_amount("7e28").unwrap_err();
    assert_eq!(err.to_string(), "The amount is too large.");
    assert!(parse_amount("50000000000000000000000000000").is_err());
    assert!(parse_limit("-2e15").is_err());
    assert_eq!(
        parse_amount("1000000000000000").unwrap(),
        dec!(1000000000000000)
    );
}
