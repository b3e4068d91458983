//! Parser for the `DTSTART` / `RRULE` text form of a recurrence.

use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind};
use super::values::{parse_byday, parse_date, parse_int_list, parse_u32};
use crate::error::{RfcError, RfcResult};
use crate::rfc::recur::core::{Frequency, Recurrence, Weekday, WeekdayNum};

/// Rule parts that exist in RFC 5545 but have no meaning for whole-day rules.
const UNSUPPORTED_PARTS: [&str; 4] = ["BYHOUR", "BYMINUTE", "BYSECOND", "BYEASTER"];
const SUB_DAILY_FREQUENCIES: [&str; 3] = ["HOURLY", "MINUTELY", "SECONDLY"];
/// Properties that would turn the rule into a rule set.
const SET_PROPERTIES: [&str; 3] = ["EXRULE", "RDATE", "EXDATE"];

/// ## Summary
/// Parses a recurrence from its text form with a Monday week start default.
///
/// Accepts an optional `DTSTART:` line plus one `RRULE:` line, or a bare
/// `FREQ=...` rule body.
///
/// ## Errors
/// Returns `RfcError::ParseError` for malformed input, `RfcError::Unsupported`
/// for multi-clause input or clauses the engine does not model, and
/// `RfcError::ValidationError` for out-of-range values.
pub fn parse(input: &str) -> RfcResult<Recurrence> {
    parse_with_week_start(input, Weekday::Monday)
}

/// ## Summary
/// Parses a recurrence from its text form, using `default_wkst` when the rule
/// has no `WKST` part.
///
/// ## Errors
/// Same as [`parse`].
pub fn parse_with_week_start(input: &str, default_wkst: Weekday) -> RfcResult<Recurrence> {
    let mut dtstart: Option<NaiveDate> = None;
    let mut body: Option<RuleBody<'_>> = None;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(colon) = line.find(':') else {
            if line.contains('=') {
                set_body(&mut body, line, line_no, 1)?;
                continue;
            }
            return Err(ParseError::new(ParseErrorKind::MissingColon, line_no, 1)
                .with_context(line.to_string())
                .into());
        };

        let (head, value) = (&line[..colon], &line[colon + 1..]);
        let mut params = head.split(';');
        let name = params.next().unwrap_or_default().to_ascii_uppercase();
        let value_col = colon + 2;

        match name.as_str() {
            "DTSTART" => {
                check_dtstart_params(params, line_no)?;
                if dtstart.is_some() {
                    return Err(ParseError::new(ParseErrorKind::DuplicatePart, line_no, 1)
                        .with_context("DTSTART")
                        .into());
                }
                dtstart = Some(parse_date(value, line_no, value_col)?);
            }
            "RRULE" => set_body(&mut body, value, line_no, value_col)?,
            other if SET_PROPERTIES.contains(&other) => {
                return Err(RfcError::Unsupported(format!(
                    "{other} clauses are not supported (line {line_no})"
                )));
            }
            other => {
                return Err(ParseError::new(ParseErrorKind::InvalidContentLine, line_no, 1)
                    .with_context(format!("unknown property '{other}'"))
                    .into());
            }
        }
    }

    let Some(body) = body else {
        return Err(ParseError::new(ParseErrorKind::UnexpectedEof, input.lines().count().max(1), 1)
            .with_context("no RRULE found")
            .into());
    };

    let rule = body.parse(dtstart, default_wkst)?;
    tracing::trace!(rule = %rule, "Parsed recurrence");
    Ok(rule)
}

/// A located `FREQ=...;...` rule body.
struct RuleBody<'a> {
    text: &'a str,
    line: usize,
    col: usize,
}

fn set_body<'a>(
    body: &mut Option<RuleBody<'a>>,
    text: &'a str,
    line: usize,
    col: usize,
) -> RfcResult<()> {
    if body.is_some() {
        return Err(RfcError::Unsupported(format!(
            "only a single RRULE clause is supported (second clause on line {line})"
        )));
    }
    *body = Some(RuleBody { text, line, col });
    Ok(())
}

fn check_dtstart_params<'a>(params: impl Iterator<Item = &'a str>, line: usize) -> RfcResult<()> {
    for param in params {
        let upper = param.to_ascii_uppercase();
        if upper.starts_with("TZID=") {
            return Err(RfcError::Unsupported(
                "time-zone-aware DTSTART is not supported".to_string(),
            ));
        }
        if upper != "VALUE=DATE" && upper != "VALUE=DATE-TIME" {
            return Err(ParseError::new(ParseErrorKind::InvalidContentLine, line, 1)
                .with_context(format!("unexpected DTSTART parameter '{param}'"))
                .into());
        }
    }
    Ok(())
}

/// Rule parts as read, before range checks.
#[derive(Default)]
struct RuleParts {
    freq: Option<Frequency>,
    interval: Option<u32>,
    count: Option<u32>,
    until: Option<NaiveDate>,
    wkst: Option<Weekday>,
    by_setpos: Option<Vec<i32>>,
    by_day: Option<Vec<WeekdayNum>>,
    by_month: Option<Vec<i32>>,
    by_monthday: Option<Vec<i32>>,
    by_yearday: Option<Vec<i32>>,
    by_weekno: Option<Vec<i32>>,
}

impl RuleBody<'_> {
    fn parse(&self, dtstart: Option<NaiveDate>, default_wkst: Weekday) -> RfcResult<Recurrence> {
        let mut parts = RuleParts::default();
        let mut offset = 0;

        for part in self.text.split(';') {
            let col = self.col + offset;
            offset += part.len() + 1;
            if part.trim().is_empty() {
                continue;
            }

            let (key, value) = part.split_once('=').ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidRRule, self.line, col)
                    .with_context(format!("expected NAME=VALUE, found '{part}'"))
            })?;
            let key = key.trim().to_ascii_uppercase();
            let value = value.trim();
            tracing::trace!(key = %key, value = %value, "Rule part");

            parse_rule_part(&mut parts, &key, value, self.line, col)?;
        }

        let freq = parts.freq.ok_or_else(|| {
            ParseError::new(ParseErrorKind::MissingFrequency, self.line, self.col)
        })?;

        let mut builder = Recurrence::builder(freq)
            .with_interval(parts.interval.unwrap_or(1))
            .with_wkst(parts.wkst.unwrap_or(default_wkst))
            .with_by_setpos(parts.by_setpos.unwrap_or_default())
            .with_by_weekday(parts.by_day.unwrap_or_default())
            .with_by_month(parts.by_month.unwrap_or_default())
            .with_by_monthday(parts.by_monthday.unwrap_or_default())
            .with_by_yearday(parts.by_yearday.unwrap_or_default())
            .with_by_weekno(parts.by_weekno.unwrap_or_default());
        if let Some(dtstart) = dtstart {
            builder = builder.with_dtstart(dtstart);
        }
        if let Some(count) = parts.count {
            builder = builder.with_count(count);
        }
        if let Some(until) = parts.until {
            builder = builder.with_until(until);
        }
        builder.build()
    }
}

/// Parses a single RRULE key-value pair.
fn parse_rule_part(
    parts: &mut RuleParts,
    key: &str,
    value: &str,
    line: usize,
    col: usize,
) -> RfcResult<()> {
    match key {
        "FREQ" => {
            let upper = value.to_ascii_uppercase();
            if SUB_DAILY_FREQUENCIES.contains(&upper.as_str()) {
                return Err(RfcError::Unsupported(format!(
                    "FREQ={upper} is not supported"
                )));
            }
            let freq = Frequency::parse(value).ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidFrequency, line, col)
                    .with_context(value.to_string())
            })?;
            set_once(&mut parts.freq, freq, key, line, col)
        }
        "INTERVAL" => set_once(&mut parts.interval, parse_u32(value, line, col)?, key, line, col),
        "COUNT" => set_once(&mut parts.count, parse_u32(value, line, col)?, key, line, col),
        "UNTIL" => set_once(&mut parts.until, parse_date(value, line, col)?, key, line, col),
        "WKST" => {
            let wkst = Weekday::parse(value).ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidWeekday, line, col)
                    .with_context(value.to_string())
            })?;
            set_once(&mut parts.wkst, wkst, key, line, col)
        }
        "BYSETPOS" => set_once(&mut parts.by_setpos, parse_int_list(value, line, col)?, key, line, col),
        "BYDAY" => set_once(&mut parts.by_day, parse_byday(value, line, col)?, key, line, col),
        "BYMONTH" => set_once(&mut parts.by_month, parse_int_list(value, line, col)?, key, line, col),
        "BYMONTHDAY" => set_once(
            &mut parts.by_monthday,
            parse_int_list(value, line, col)?,
            key,
            line,
            col,
        ),
        "BYYEARDAY" => set_once(
            &mut parts.by_yearday,
            parse_int_list(value, line, col)?,
            key,
            line,
            col,
        ),
        "BYWEEKNO" => set_once(&mut parts.by_weekno, parse_int_list(value, line, col)?, key, line, col),
        other if UNSUPPORTED_PARTS.contains(&other) => Err(RfcError::Unsupported(format!(
            "{other} rule part is not supported"
        ))),
        other => Err(ParseError::new(ParseErrorKind::InvalidRRule, line, col)
            .with_context(format!("unknown rule part '{other}'"))
            .into()),
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &str, line: usize, col: usize) -> RfcResult<()> {
    if slot.is_some() {
        return Err(ParseError::new(ParseErrorKind::DuplicatePart, line, col)
            .with_context(key.to_string())
            .into());
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
