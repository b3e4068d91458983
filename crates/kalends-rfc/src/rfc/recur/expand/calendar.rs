//! Calendar arithmetic used by the expander.

use chrono::{Datelike, Days, NaiveDate};

use crate::rfc::recur::core::Weekday;

/// Number of days in `month` of `year`.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|last| last.pred_opt())
        .map_or(28, |last| last.day())
}

pub(crate) fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// The first day of week 1 of `year`: the week (starting on `wkst`) that
/// holds at least four days of the year.
fn week_one_start(year: i32, wkst: Weekday) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let back = Weekday::from(jan1.weekday()).days_since(wkst);
    let first = jan1.checked_sub_days(Days::new(u64::from(back)))?;
    if 7 - back >= 4 {
        Some(first)
    } else {
        first.checked_add_days(Days::new(7))
    }
}

/// Week number of `date` within its week-numbering year, plus the number of
/// weeks in that year.
pub(crate) fn week_number(date: NaiveDate, wkst: Weekday) -> Option<(i64, i64)> {
    let mut year = date.year();
    let mut start = week_one_start(year, wkst)?;
    if date < start {
        year -= 1;
        start = week_one_start(year, wkst)?;
    } else {
        let next = week_one_start(year + 1, wkst)?;
        if date >= next {
            year += 1;
            start = next;
        }
    }
    let end = week_one_start(year + 1, wkst)?;
    let week = (date - start).num_days() / 7 + 1;
    let weeks_in_year = (end - start).num_days() / 7;
    Some((week, weeks_in_year))
}

/// Whether a 1-based `position` within a run of `len` matches `selector`,
/// which counts from the start when positive and from the end when negative.
pub(crate) fn position_matches(selector: i64, position: i64, len: i64) -> bool {
    selector == position || selector == position - len - 1
}
