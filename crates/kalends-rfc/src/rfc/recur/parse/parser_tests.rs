//! Tests for the recurrence text parser.

use super::*;
use crate::rfc::recur::core::{FR, MO, TU, WE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn parse_error_kind(input: &str) -> ParseErrorKind {
    match parse(input) {
        Err(RfcError::ParseError(err)) => err.kind,
        other => panic!("expected parse error for {input:?}, got {other:?}"),
    }
}

#[test_log::test]
fn parse_two_line_form() {
    let rule = parse("DTSTART:19900102\nRRULE:FREQ=WEEKLY;BYDAY=TU;UNTIL=19900329")
        .expect("valid rule");
    assert_eq!(rule.dtstart(), Some(date(1990, 1, 2)));
    assert_eq!(rule.frequency(), Frequency::Weekly);
    assert_eq!(rule.interval(), 1);
    assert_eq!(rule.until(), Some(date(1990, 3, 29)));
    assert_eq!(rule.by_weekday(), &[TU]);
}

#[test]
fn parse_bare_body() {
    let rule = parse("FREQ=MONTHLY;INTERVAL=2;BYDAY=+2TU,-1FR").expect("valid rule");
    assert_eq!(rule.dtstart(), None);
    assert_eq!(rule.interval(), 2);
    assert_eq!(
        rule.by_weekday(),
        &[TU.nth(2).expect("in range"), FR.nth(-1).expect("in range")]
    );
}

#[test]
fn parse_is_case_insensitive_and_tolerates_crlf() {
    let rule = parse("dtstart:19900101\r\nrrule:freq=daily;count=3;\r\n").expect("valid rule");
    assert_eq!(rule.frequency(), Frequency::Daily);
    assert_eq!(rule.count(), Some(3));
}

#[test]
fn parse_dtstart_datetime_and_value_param() {
    let rule = parse("DTSTART;VALUE=DATE-TIME:19900102T100000\nRRULE:FREQ=DAILY")
        .expect("valid rule");
    assert_eq!(rule.dtstart(), Some(date(1990, 1, 2)));
    let rule = parse("DTSTART;VALUE=DATE:19900102\nRRULE:FREQ=DAILY").expect("valid rule");
    assert_eq!(rule.dtstart(), Some(date(1990, 1, 2)));
}

#[test]
fn parse_all_selectors() {
    let rule = parse(
        "RRULE:FREQ=YEARLY;WKST=SU;BYSETPOS=-1;BYDAY=MO,WE;BYMONTH=3,1;\
         BYMONTHDAY=-1,1;BYYEARDAY=100;BYWEEKNO=20",
    )
    .expect("valid rule");
    assert_eq!(rule.week_start(), Weekday::Sunday);
    assert_eq!(rule.by_setpos(), &[-1]);
    assert_eq!(rule.by_weekday(), &[MO, WE]);
    assert_eq!(rule.by_month(), &[1, 3]);
    assert_eq!(rule.by_monthday(), &[1, -1]);
    assert_eq!(rule.by_yearday(), &[100]);
    assert_eq!(rule.by_weekno(), &[20]);
}

#[test]
fn parse_uses_default_week_start() {
    let rule = parse_with_week_start("FREQ=WEEKLY", Weekday::Sunday).expect("valid rule");
    assert_eq!(rule.week_start(), Weekday::Sunday);
    let rule = parse_with_week_start("FREQ=WEEKLY;WKST=TU", Weekday::Sunday).expect("valid rule");
    assert_eq!(rule.week_start(), Weekday::Tuesday);
}

#[test]
fn parse_accepts_count_with_until() {
    let rule = parse("FREQ=DAILY;COUNT=5;UNTIL=19900103").expect("valid rule");
    assert_eq!(rule.count(), Some(5));
    assert_eq!(rule.until(), Some(date(1990, 1, 3)));
}

#[test]
fn parse_rejects_second_clause() {
    let err = parse("DTSTART:19900101\nRRULE:FREQ=DAILY\nRRULE:FREQ=WEEKLY")
        .expect_err("two clauses");
    assert!(matches!(err, RfcError::Unsupported(_)));
}

#[test]
fn parse_rejects_rule_set_properties() {
    for input in [
        "RRULE:FREQ=DAILY\nEXDATE:19900102",
        "RRULE:FREQ=DAILY\nRDATE:19900102",
        "RRULE:FREQ=DAILY\nEXRULE:FREQ=WEEKLY",
    ] {
        let err = parse(input).expect_err("rule sets are unsupported");
        assert!(matches!(err, RfcError::Unsupported(_)), "input {input:?}");
    }
}

#[test]
fn parse_rejects_unmodelled_clauses() {
    for input in [
        "FREQ=HOURLY",
        "FREQ=secondly",
        "FREQ=DAILY;BYHOUR=10",
        "FREQ=YEARLY;BYEASTER=0",
        "DTSTART;TZID=Europe/London:19900101T100000\nRRULE:FREQ=DAILY",
    ] {
        let err = parse(input).expect_err("unsupported clause");
        assert!(matches!(err, RfcError::Unsupported(_)), "input {input:?}");
    }
}

#[test]
fn parse_malformed_input() {
    assert_eq!(parse_error_kind(""), ParseErrorKind::UnexpectedEof);
    assert_eq!(
        parse_error_kind("DTSTART:19900101"),
        ParseErrorKind::UnexpectedEof
    );
    assert_eq!(parse_error_kind("hello"), ParseErrorKind::MissingColon);
    assert_eq!(
        parse_error_kind("SUMMARY:Meeting"),
        ParseErrorKind::InvalidContentLine
    );
    assert_eq!(parse_error_kind("INTERVAL=2"), ParseErrorKind::MissingFrequency);
    assert_eq!(parse_error_kind("FREQ=FORTNIGHTLY"), ParseErrorKind::InvalidFrequency);
    assert_eq!(parse_error_kind("FREQ=DAILY;FOO=1"), ParseErrorKind::InvalidRRule);
    assert_eq!(parse_error_kind("FREQ=DAILY;COUNT"), ParseErrorKind::InvalidRRule);
    assert_eq!(parse_error_kind("FREQ=DAILY;COUNT=x"), ParseErrorKind::InvalidInteger);
    assert_eq!(parse_error_kind("FREQ=DAILY;UNTIL=1990"), ParseErrorKind::InvalidDate);
    assert_eq!(parse_error_kind("FREQ=WEEKLY;BYDAY=XX"), ParseErrorKind::InvalidWeekday);
    assert_eq!(parse_error_kind("FREQ=WEEKLY;WKST=XX"), ParseErrorKind::InvalidWeekday);
    assert_eq!(
        parse_error_kind("FREQ=DAILY;FREQ=WEEKLY"),
        ParseErrorKind::DuplicatePart
    );
    assert_eq!(
        parse_error_kind("DTSTART:19900101\nDTSTART:19900102\nRRULE:FREQ=DAILY"),
        ParseErrorKind::DuplicatePart
    );
}

#[test]
fn parse_reports_part_column() {
    let Err(RfcError::ParseError(err)) = parse("DTSTART:19900101\nRRULE:FREQ=DAILY;COUNT=x")
    else {
        panic!("expected a parse error");
    };
    assert_eq!(err.line, 2);
    // "RRULE:" is 6 columns, "FREQ=DAILY;" another 11
    assert_eq!(err.column, 18);
}

#[test]
fn parse_out_of_range_values_fail_validation() {
    let err = parse("FREQ=MONTHLY;BYMONTHDAY=0").expect_err("zero month day");
    assert!(matches!(err, RfcError::ValidationError(_)));
    let err = parse("FREQ=DAILY;INTERVAL=0").expect_err("zero interval");
    assert!(matches!(err, RfcError::ValidationError(_)));
}
