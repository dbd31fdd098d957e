//! Lenient field parsers
//!
//! Every parser returns `None` instead of an error. Rules treat `None` as
//! "condition not met", which keeps scoring total over any receipt.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Parses a decimal amount such as `"35.35"`.
///
/// Non-finite values (`"inf"`, `"NaN"`) are rejected so they can never leak
/// into integer arithmetic.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Day of month of a `YYYY-MM-DD` date.
pub fn parse_day_of_month(raw: &str) -> Option<u32> {
    if !is_zero_padded(raw, "YYYY-MM-DD") {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().map(|date| date.day())
}

/// Hour component of a 24-hour `HH:MM` time.
pub fn parse_hour(raw: &str) -> Option<u32> {
    if !is_zero_padded(raw, "HH:MM") {
        return None;
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).ok().map(|time| time.hour())
}

/// chrono accepts `2022-3-1` and `14:5` for the formats above; fields here
/// must be zero-padded to the width of `layout`.
fn is_zero_padded(raw: &str, layout: &str) -> bool {
    raw.len() == layout.len()
        && raw.bytes().zip(layout.bytes()).all(|(c, l)| {
            if l.is_ascii_alphabetic() { c.is_ascii_digit() } else { c == l }
        })
}
