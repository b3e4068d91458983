//! Value parsers for rule parts (RFC 5545 §3.3).
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report kind and position rather than the std error source"
)]

use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::recur::core::{Weekday, WeekdayNum};

/// Parses a DATE value (RFC 5545 §3.3.4), also accepting a floating or UTC
/// DATE-TIME whose time part is discarded.
///
/// Format: YYYYMMDD (e.g., "19970714") or YYYYMMDD"T"HHMMSS[Z]
///
/// ## Errors
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<NaiveDate> {
    let date_str = match s.split_once('T') {
        Some((date, time)) => {
            let time = time.strip_suffix('Z').unwrap_or(time);
            if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::new(ParseErrorKind::InvalidDate, line, col)
                    .with_context(format!("invalid time part in '{s}'")));
            }
            date
        }
        None => s,
    };

    if date_str.len() != 8 || !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidDate, line, col)
            .with_context("Expected YYYYMMDD format"));
    }

    let year = date_str[0..4]
        .parse::<i32>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;
    let month = date_str[4..6]
        .parse::<u32>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;
    let day = date_str[6..8]
        .parse::<u32>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidDate, line, col)
            .with_context(format!("'{date_str}' is not a calendar date"))
    })
}

/// Parses a non-negative integer such as INTERVAL or COUNT.
///
/// ## Errors
/// Returns an error if the value is not an unsigned integer.
pub fn parse_u32(s: &str, line: usize, col: usize) -> ParseResult<u32> {
    s.trim().parse().map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidInteger, line, col).with_context(s.to_string())
    })
}

/// Parses a comma-separated list of signed integers (`+` prefix allowed).
///
/// Range checks are left to the rule builder.
///
/// ## Errors
/// Returns an error if any element is not an integer.
pub fn parse_int_list(s: &str, line: usize, col: usize) -> ParseResult<Vec<i32>> {
    s.split(',')
        .map(|v| {
            let v = v.trim();
            v.strip_prefix('+').unwrap_or(v).parse().map_err(|_| {
                ParseError::new(ParseErrorKind::InvalidInteger, line, col)
                    .with_context(v.to_string())
            })
        })
        .collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
///
/// ## Errors
/// Returns an error if any element is not a weekday code.
pub fn parse_byday(s: &str, line: usize, col: usize) -> ParseResult<Vec<WeekdayNum>> {
    s.split(',')
        .map(|v| parse_weekday_num(v.trim(), line, col))
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "+2TU", "-1FR").
///
/// ## Errors
/// Returns an error if the code or the ordinal is invalid.
pub fn parse_weekday_num(s: &str, line: usize, col: usize) -> ParseResult<WeekdayNum> {
    let s = s.trim();

    // The weekday is always the last two characters
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(ParseError::new(ParseErrorKind::InvalidWeekday, line, col)
            .with_context(s.to_string()));
    }

    let weekday_str = &s[s.len() - 2..];
    let ordinal_str = &s[..s.len() - 2];

    let weekday = Weekday::parse(weekday_str).ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s.to_string())
    })?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }

    let ordinal: i32 = ordinal_str
        .strip_prefix('+')
        .unwrap_or(ordinal_str)
        .parse()
        .map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidWeekday, line, col)
                .with_context(s.to_string())
        })?;

    WeekdayNum::every(weekday).nth(ordinal).map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidWeekday, line, col)
            .with_context(format!("ordinal out of range in '{s}'"))
    })
}
