//! Expansion tests, mostly taken from the examples of RFC 5545 §3.8.5.3.
//!
//! The RFC examples carry times of day; only their dates are kept here.

use chrono::NaiveDate;

use crate::rfc::recur::core::{MO, Recurrence};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn expand(text: &str, limit: usize) -> Vec<NaiveDate> {
    let rule: Recurrence = text.parse().expect("valid rule");
    rule.occurrences().take(limit).collect()
}

fn ymd(dates: &[(i32, u32, u32)]) -> Vec<NaiveDate> {
    dates.iter().map(|&(y, m, d)| date(y, m, d)).collect()
}

#[test_log::test]
fn daily_for_ten_occurrences() {
    let dates = expand("DTSTART:19970902\nRRULE:FREQ=DAILY;COUNT=10", 100);
    assert_eq!(dates.len(), 10);
    assert_eq!(dates.first(), Some(&date(1997, 9, 2)));
    assert_eq!(dates.last(), Some(&date(1997, 9, 11)));
}

#[test]
fn every_other_day() {
    let dates = expand("DTSTART:19970902\nRRULE:FREQ=DAILY;INTERVAL=2;COUNT=5", 100);
    assert_eq!(
        dates,
        ymd(&[(1997, 9, 2), (1997, 9, 4), (1997, 9, 6), (1997, 9, 8), (1997, 9, 10)])
    );
}

#[test]
fn daily_in_january_for_three_years() {
    let dates = expand(
        "DTSTART:19980101\nRRULE:FREQ=DAILY;UNTIL=20000131;BYMONTH=1",
        1000,
    );
    assert_eq!(dates.len(), 93);
    assert_eq!(dates.last(), Some(&date(2000, 1, 31)));
}

#[test]
fn weekly_on_tuesday_and_thursday() {
    let dates = expand(
        "DTSTART:19970902\nRRULE:FREQ=WEEKLY;COUNT=10;WKST=SU;BYDAY=TU,TH",
        100,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 2),
            (1997, 9, 4),
            (1997, 9, 9),
            (1997, 9, 11),
            (1997, 9, 16),
            (1997, 9, 18),
            (1997, 9, 23),
            (1997, 9, 25),
            (1997, 9, 30),
            (1997, 10, 2),
        ])
    );
}

#[test]
fn every_other_week_on_tuesday_and_thursday() {
    let dates = expand(
        "DTSTART:19970902\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=8;WKST=SU;BYDAY=TU,TH",
        100,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 2),
            (1997, 9, 4),
            (1997, 9, 16),
            (1997, 9, 18),
            (1997, 9, 30),
            (1997, 10, 2),
            (1997, 10, 14),
            (1997, 10, 16),
        ])
    );
}

#[test]
fn week_start_changes_biweekly_grouping() {
    let monday = expand(
        "DTSTART:19970805\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=MO",
        100,
    );
    assert_eq!(
        monday,
        ymd(&[(1997, 8, 5), (1997, 8, 10), (1997, 8, 19), (1997, 8, 24)])
    );

    let sunday = expand(
        "DTSTART:19970805\nRRULE:FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=SU",
        100,
    );
    assert_eq!(
        sunday,
        ymd(&[(1997, 8, 5), (1997, 8, 17), (1997, 8, 19), (1997, 8, 31)])
    );
}

#[test]
fn monthly_on_first_friday() {
    let dates = expand("DTSTART:19970905\nRRULE:FREQ=MONTHLY;COUNT=10;BYDAY=1FR", 100);
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 5),
            (1997, 10, 3),
            (1997, 11, 7),
            (1997, 12, 5),
            (1998, 1, 2),
            (1998, 2, 6),
            (1998, 3, 6),
            (1998, 4, 3),
            (1998, 5, 1),
            (1998, 6, 5),
        ])
    );
}

#[test]
fn monthly_on_second_to_last_monday() {
    let dates = expand("DTSTART:19970922\nRRULE:FREQ=MONTHLY;COUNT=6;BYDAY=-2MO", 100);
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 22),
            (1997, 10, 20),
            (1997, 11, 17),
            (1997, 12, 22),
            (1998, 1, 19),
            (1998, 2, 16),
        ])
    );
}

#[test]
fn monthly_on_third_to_last_day() {
    let dates = expand("DTSTART:19970928\nRRULE:FREQ=MONTHLY;BYMONTHDAY=-3", 6);
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 28),
            (1997, 10, 29),
            (1997, 11, 28),
            (1997, 12, 29),
            (1998, 1, 29),
            (1998, 2, 26),
        ])
    );
}

#[test]
fn monthly_on_first_and_last_day() {
    let dates = expand(
        "DTSTART:19970930\nRRULE:FREQ=MONTHLY;COUNT=10;BYMONTHDAY=1,-1",
        100,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 30),
            (1997, 10, 1),
            (1997, 10, 31),
            (1997, 11, 1),
            (1997, 11, 30),
            (1997, 12, 1),
            (1997, 12, 31),
            (1998, 1, 1),
            (1998, 1, 31),
            (1998, 2, 1),
        ])
    );
}

#[test]
fn every_eighteen_months_mid_month() {
    let dates = expand(
        "DTSTART:19970910\nRRULE:FREQ=MONTHLY;INTERVAL=18;COUNT=10;BYMONTHDAY=10,11,12,13,14,15",
        100,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 10),
            (1997, 9, 11),
            (1997, 9, 12),
            (1997, 9, 13),
            (1997, 9, 14),
            (1997, 9, 15),
            (1999, 3, 10),
            (1999, 3, 11),
            (1999, 3, 12),
            (1999, 3, 13),
        ])
    );
}

#[test]
fn monthly_skips_months_without_the_day() {
    let dates = expand("DTSTART:20070131\nRRULE:FREQ=MONTHLY;COUNT=4", 100);
    assert_eq!(
        dates,
        ymd(&[(2007, 1, 31), (2007, 3, 31), (2007, 5, 31), (2007, 7, 31)])
    );
}

#[test]
fn friday_the_thirteenth() {
    let dates = expand("DTSTART:19970902\nRRULE:FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13", 5);
    assert_eq!(
        dates,
        ymd(&[
            (1998, 2, 13),
            (1998, 3, 13),
            (1998, 11, 13),
            (1999, 8, 13),
            (2000, 10, 13),
        ])
    );
}

#[test]
fn last_work_day_of_the_month() {
    let dates = expand(
        "DTSTART:19970929\nRRULE:FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1",
        7,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 9, 30),
            (1997, 10, 31),
            (1997, 11, 28),
            (1997, 12, 31),
            (1998, 1, 30),
            (1998, 2, 27),
            (1998, 3, 31),
        ])
    );
}

#[test]
fn third_tuesday_wednesday_or_thursday() {
    let dates = expand(
        "DTSTART:19970904\nRRULE:FREQ=MONTHLY;COUNT=3;BYDAY=TU,WE,TH;BYSETPOS=3",
        100,
    );
    assert_eq!(dates, ymd(&[(1997, 9, 4), (1997, 10, 7), (1997, 11, 6)]));
}

#[test]
fn yearly_in_june_and_july() {
    let dates = expand("DTSTART:19970610\nRRULE:FREQ=YEARLY;COUNT=10;BYMONTH=6,7", 100);
    assert_eq!(dates.len(), 10);
    assert_eq!(&dates[..3], &ymd(&[(1997, 6, 10), (1997, 7, 10), (1998, 6, 10)]));
    assert_eq!(dates.last(), Some(&date(2001, 7, 10)));
}

#[test]
fn every_third_year_by_year_day() {
    let dates = expand(
        "DTSTART:19970101\nRRULE:FREQ=YEARLY;INTERVAL=3;COUNT=10;BYYEARDAY=1,100,200",
        100,
    );
    assert_eq!(
        dates,
        ymd(&[
            (1997, 1, 1),
            (1997, 4, 10),
            (1997, 7, 19),
            (2000, 1, 1),
            (2000, 4, 9),
            (2000, 7, 18),
            (2003, 1, 1),
            (2003, 4, 10),
            (2003, 7, 19),
            (2006, 1, 1),
        ])
    );
}

#[test]
fn yearly_twentieth_monday() {
    let dates = expand("DTSTART:19970519\nRRULE:FREQ=YEARLY;BYDAY=20MO", 3);
    assert_eq!(dates, ymd(&[(1997, 5, 19), (1998, 5, 18), (1999, 5, 17)]));
}

#[test]
fn yearly_monday_of_week_twenty() {
    let dates = expand("DTSTART:19970512\nRRULE:FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO", 3);
    assert_eq!(dates, ymd(&[(1997, 5, 12), (1998, 5, 11), (1999, 5, 17)]));
}

#[test]
fn yearly_thursdays_in_march() {
    let dates = expand("DTSTART:19970313\nRRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=TH", 11);
    assert_eq!(
        dates,
        ymd(&[
            (1997, 3, 13),
            (1997, 3, 20),
            (1997, 3, 27),
            (1998, 3, 5),
            (1998, 3, 12),
            (1998, 3, 19),
            (1998, 3, 26),
            (1999, 3, 4),
            (1999, 3, 11),
            (1999, 3, 18),
            (1999, 3, 25),
        ])
    );
}

#[test]
fn yearly_on_leap_day_skips_common_years() {
    let dates = expand("DTSTART:20000229\nRRULE:FREQ=YEARLY;COUNT=3", 100);
    assert_eq!(dates, ymd(&[(2000, 2, 29), (2004, 2, 29), (2008, 2, 29)]));
}

#[test]
fn dates_before_start_are_skipped() {
    // The week holding the start also holds an earlier Monday
    let dates = expand("DTSTART:19900103\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE;COUNT=3", 100);
    assert_eq!(dates, ymd(&[(1990, 1, 3), (1990, 1, 8), (1990, 1, 10)]));
}

#[test]
fn count_and_until_stop_at_first_bound() {
    let by_until = expand("DTSTART:19900101\nRRULE:FREQ=DAILY;COUNT=5;UNTIL=19900103", 100);
    assert_eq!(by_until.len(), 3);
    let by_count = expand("DTSTART:19900101\nRRULE:FREQ=DAILY;COUNT=2;UNTIL=19991231", 100);
    assert_eq!(by_count.len(), 2);
}

#[test]
fn until_is_inclusive() {
    let dates = expand("DTSTART:19900102\nRRULE:FREQ=WEEKLY;UNTIL=19900116", 100);
    assert_eq!(dates, ymd(&[(1990, 1, 2), (1990, 1, 9), (1990, 1, 16)]));
}

#[test]
fn expansion_ends_after_year_9999() {
    let dates = expand("DTSTART:99980101\nRRULE:FREQ=YEARLY", 100);
    assert_eq!(dates, ymd(&[(9998, 1, 1), (9999, 1, 1)]));
}

#[test]
fn rule_that_never_matches_terminates() {
    let rule = Recurrence::yearly()
        .with_dtstart(date(9990, 1, 1))
        .with_by_month([2])
        .with_by_monthday([30])
        .build()
        .expect("valid rule");
    assert_eq!(rule.occurrences().next(), None);
    let rule = rule
        .to_builder()
        .with_by_weekday([MO])
        .build()
        .expect("valid rule");
    assert_eq!(rule.occurrences().next(), None);
}

#[test]
fn occurrences_restart_from_the_beginning() {
    let rule: Recurrence = "DTSTART:19900101\nRRULE:FREQ=DAILY;COUNT=3"
        .parse()
        .expect("valid rule");
    let first: Vec<_> = rule.occurrences().collect();
    let second: Vec<_> = rule.occurrences().collect();
    assert_eq!(first, second);

    let mut iter = rule.occurrences();
    iter.next();
    let rest: Vec<_> = iter.clone().collect();
    assert_eq!(rest, iter.collect::<Vec<_>>());
}

#[test]
fn missing_start_anchors_on_today() {
    let today = chrono::Local::now().date_naive();
    let rule = Recurrence::daily().build().expect("valid rule");
    let first = rule.occurrences().next().expect("unbounded rule");
    assert!(first >= today);
    assert!(first <= today.succ_opt().expect("valid date"));
}
