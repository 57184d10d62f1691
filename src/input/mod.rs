use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{bail, Result};
use regex::Regex;
use rust_decimal::Decimal;

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Literal pattern, checked by the tests below.
#[allow(clippy::unwrap_used)]
static MONTH_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-(1[0-2]|[1-9])$").unwrap()
});

/// Build the bucket key for a month: `"{year}-{month}"`, month 1..12 unpadded.
pub(crate) fn month_key(year: &str, month_index: usize) -> String {
    format!("{}-{}", year.trim(), month_index + 1)
}

/// Split a well-formed month key into (year, month). Anything else is `None`.
pub(crate) fn split_month_key(key: &str) -> Option<(i32, u32)> {
    let caps = MONTH_KEY.captures(key)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    Some((year, month))
}

/// Human label for a month key, e.g. `"2024-3"` → `"March 2024"`.
pub(crate) fn month_label(key: &str) -> String {
    match split_month_key(key) {
        Some((year, month)) => format!("{} {year}", MONTH_NAMES[month as usize - 1]),
        None => key.to_string(),
    }
}

/// Parse a month as a name, a three-letter prefix, or a number 1..12.
/// Returns the zero-based index into [`MONTH_NAMES`].
pub(crate) fn parse_month(input: &str) -> Result<usize> {
    let s = input.trim();
    if s.is_empty() {
        bail!("Please choose a month.");
    }

    if let Ok(n) = s.parse::<usize>() {
        if (1..=12).contains(&n) {
            return Ok(n - 1);
        }
        bail!("Month must be between 1 and 12, got {n}.");
    }

    let lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() >= 3 && name.starts_with(&lower))
        })
        .ok_or_else(|| anyhow::anyhow!("Unknown month: {s}"))
}

pub(crate) fn parse_year(input: &str) -> Result<String> {
    let s = input.trim();
    if s.is_empty() {
        bail!("Please enter a year.");
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        bail!("Please enter a valid year, got '{s}'.");
    }
    Ok(s.to_string())
}

pub(crate) fn current_year() -> String {
    chrono::Local::now().format("%Y").to_string()
}

pub(crate) fn parse_amount(input: &str) -> Result<Decimal> {
    parse_number(input, "amount")
}

pub(crate) fn parse_limit(input: &str) -> Result<Decimal> {
    parse_number(input, "threshold")
}

/// Largest magnitude accepted from the user. Far enough below `Decimal::MAX`
/// that session totals stay exact.
const MAX_INPUT: i64 = 1_000_000_000_000_000;

fn parse_number(input: &str, what: &str) -> Result<Decimal> {
    let s = input.trim();
    if s.is_empty() {
        bail!("Please enter a valid number for the {what}.");
    }
    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| anyhow::anyhow!("Please enter a valid number for the {what}."))?;
    if value.abs() > Decimal::from(MAX_INPUT) {
        bail!("The {what} is too large.");
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
