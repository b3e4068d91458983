//! Recurrence serializer.
//!
//! Rule parts are written in a fixed order: FREQ, INTERVAL, WKST, COUNT,
//! UNTIL, BYSETPOS, BYDAY, BYMONTH, BYMONTHDAY, BYYEARDAY, BYWEEKNO.

use std::fmt::Display;

use chrono::NaiveDate;

use crate::rfc::recur::core::Recurrence;

/// Serializes a recurrence to its two-line text form.
///
/// The `DTSTART` line is omitted when the rule has no start date.
#[must_use]
pub fn serialize(rule: &Recurrence) -> String {
    let body = format!("RRULE:{}", serialize_rrule(rule));
    match rule.dtstart() {
        Some(dtstart) => format!("DTSTART:{}\n{body}", format_date(dtstart)),
        None => body,
    }
}

/// Serializes the rule body (the value of the `RRULE` property).
#[must_use]
pub fn serialize_rrule(rule: &Recurrence) -> String {
    let mut parts = vec![format!("FREQ={}", rule.frequency())];

    if rule.interval() != 1 {
        parts.push(format!("INTERVAL={}", rule.interval()));
    }

    parts.push(format!("WKST={}", rule.week_start()));

    if let Some(count) = rule.count() {
        parts.push(format!("COUNT={count}"));
    }

    if let Some(until) = rule.until() {
        parts.push(format!("UNTIL={}", format_date(until)));
    }

    push_list(&mut parts, "BYSETPOS", rule.by_setpos());
    push_list(&mut parts, "BYDAY", rule.by_weekday());
    push_list(&mut parts, "BYMONTH", rule.by_month());
    push_list(&mut parts, "BYMONTHDAY", rule.by_monthday());
    push_list(&mut parts, "BYYEARDAY", rule.by_yearday());
    push_list(&mut parts, "BYWEEKNO", rule.by_weekno());

    parts.join(";")
}

fn push_list<T: Display>(parts: &mut Vec<String>, name: &str, values: &[T]) {
    if !values.is_empty() {
        let s: Vec<_> = values.iter().map(ToString::to_string).collect();
        parts.push(format!("{name}={}", s.join(",")));
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
