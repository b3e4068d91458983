//! Lazy occurrence expansion.
//!
//! Each step takes one period of the rule's frequency (a day, a week starting
//! on `WKST`, a month or a year), keeps the days of that period accepted by
//! every selector, applies `BYSETPOS`, then advances `INTERVAL` periods.

use std::borrow::Cow;
use std::collections::VecDeque;

use chrono::{Datelike, Days, Months, NaiveDate};

use super::calendar::{days_in_month, days_in_year, position_matches, week_number};
use crate::rfc::recur::core::{Frequency, Recurrence, Weekday, WeekdayNum};

/// Expansion stops once a period starts after this year.
const MAX_YEAR: i32 = 9999;

impl Recurrence {
    /// ## Summary
    /// Returns a fresh, lazy iterator over the occurrence dates.
    ///
    /// Dates are strictly increasing and never earlier than `dtstart`. The
    /// sequence ends at `until` (inclusive) or after `count` dates, whichever
    /// comes first, and is otherwise unbounded. A rule without `dtstart`
    /// starts from today's local date.
    #[must_use]
    pub fn occurrences(&self) -> Occurrences<'_> {
        let rule = match self.dtstart {
            Some(_) => Cow::Borrowed(self),
            None => Cow::Owned(self.anchored(chrono::Local::now().date_naive())),
        };
        Occurrences::new(rule)
    }
}

/// Iterator over the dates of a [`Recurrence`].
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    rule: Cow<'a, Recurrence>,
    start: NaiveDate,
    /// Start of the next period to expand; `None` once exhausted.
    period: Option<NaiveDate>,
    pending: VecDeque<NaiveDate>,
    emitted: u32,
}

impl<'a> Occurrences<'a> {
    fn new(rule: Cow<'a, Recurrence>) -> Self {
        let start = rule.dtstart.unwrap_or_default();
        let period = period_start(&rule, start);
        tracing::trace!(rule = %rule, ?period, "Starting expansion");
        Self {
            rule,
            start,
            period,
            pending: VecDeque::new(),
            emitted: 0,
        }
    }

    fn finish(&mut self) {
        self.period = None;
        self.pending.clear();
    }

    /// Collects the selected days of the period starting at `period`.
    fn expand_period(&self, period: NaiveDate) -> Vec<NaiveDate> {
        let len = match self.rule.freq {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => days_in_month(period.year(), period.month()),
            Frequency::Yearly => days_in_year(period.year()),
        };
        let days: Vec<NaiveDate> = period
            .iter_days()
            .take(usize::try_from(len).unwrap_or_default())
            .filter(|day| self.accepts(*day))
            .collect();
        if self.rule.by_setpos.is_empty() {
            days
        } else {
            select_positions(&days, &self.rule.by_setpos)
        }
    }

    fn accepts(&self, day: NaiveDate) -> bool {
        let rule = &self.rule;
        (rule.by_month.is_empty() || rule.by_month.iter().any(|m| u32::from(*m) == day.month()))
            && (rule.by_weekno.is_empty() || self.accepts_weekno(day))
            && (rule.by_yearday.is_empty() || accepts_yearday(day, &rule.by_yearday))
            && (rule.by_monthday.is_empty() || accepts_monthday(day, &rule.by_monthday))
            && (rule.by_weekday.is_empty()
                || rule.by_weekday.iter().any(|wd| self.accepts_weekday(day, *wd)))
    }

    fn accepts_weekno(&self, day: NaiveDate) -> bool {
        week_number(day, self.rule.wkst).is_some_and(|(week, weeks)| {
            self.rule
                .by_weekno
                .iter()
                .any(|n| position_matches(i64::from(*n), week, weeks))
        })
    }

    /// Plain weekdays match every such day; ordinal ones count within the
    /// month (monthly rules, or yearly rules narrowed by BYMONTH) or the year.
    fn accepts_weekday(&self, day: NaiveDate, selector: WeekdayNum) -> bool {
        if Weekday::from(day.weekday()) != selector.weekday {
            return false;
        }
        let Some(n) = selector.ordinal else {
            return true;
        };
        let within_month = self.rule.freq == Frequency::Monthly || !self.rule.by_month.is_empty();
        let (position, len) = if within_month {
            (day.day(), days_in_month(day.year(), day.month()))
        } else {
            (day.ordinal(), days_in_year(day.year()))
        };
        let nth = i64::from((position - 1) / 7 + 1);
        let from_end = i64::from((len - position) / 7 + 1);
        i64::from(n) == nth || i64::from(n) == -from_end
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            if let Some(day) = self.pending.pop_front() {
                if day < self.start {
                    continue;
                }
                if self.rule.until.is_some_and(|until| day > until)
                    || self.rule.count.is_some_and(|count| self.emitted >= count)
                {
                    self.finish();
                    return None;
                }
                self.emitted += 1;
                return Some(day);
            }

            let period = self.period?;
            if period.year() > MAX_YEAR || self.rule.until.is_some_and(|until| period > until) {
                self.finish();
                return None;
            }
            let days = self.expand_period(period);
            self.pending.extend(days);
            self.period = next_period(&self.rule, period);
        }
    }
}

/// First day of the period that holds `start`.
fn period_start(rule: &Recurrence, start: NaiveDate) -> Option<NaiveDate> {
    match rule.freq {
        Frequency::Daily => Some(start),
        Frequency::Weekly => {
            let back = Weekday::from(start.weekday()).days_since(rule.wkst);
            start.checked_sub_days(Days::new(u64::from(back)))
        }
        Frequency::Monthly => start.with_day(1),
        Frequency::Yearly => NaiveDate::from_ymd_opt(start.year(), 1, 1),
    }
}

fn next_period(rule: &Recurrence, period: NaiveDate) -> Option<NaiveDate> {
    let interval = rule.interval;
    match rule.freq {
        Frequency::Daily => period.checked_add_days(Days::new(u64::from(interval))),
        Frequency::Weekly => period.checked_add_days(Days::new(7 * u64::from(interval))),
        Frequency::Monthly => period.checked_add_months(Months::new(interval)),
        Frequency::Yearly => period.checked_add_months(Months::new(interval.checked_mul(12)?)),
    }
}

fn accepts_yearday(day: NaiveDate, selectors: &[i16]) -> bool {
    let len = i64::from(days_in_year(day.year()));
    let position = i64::from(day.ordinal());
    selectors
        .iter()
        .any(|n| position_matches(i64::from(*n), position, len))
}

fn accepts_monthday(day: NaiveDate, selectors: &[i8]) -> bool {
    let len = i64::from(days_in_month(day.year(), day.month()));
    let position = i64::from(day.day());
    selectors
        .iter()
        .any(|n| position_matches(i64::from(*n), position, len))
}

/// Picks 1-based (or from-the-end negative) positions out of `days`.
fn select_positions(days: &[NaiveDate], positions: &[i16]) -> Vec<NaiveDate> {
    let len = i64::try_from(days.len()).unwrap_or(i64::MAX);
    let mut picked: Vec<NaiveDate> = positions
        .iter()
        .filter_map(|pos| {
            let pos = i64::from(*pos);
            let index = if pos > 0 { pos - 1 } else { len + pos };
            let index = usize::try_from(index).ok()?;
            days.get(index).copied()
        })
        .collect();
    picked.sort_unstable();
    picked.dedup();
    picked
}

#[cfg(test)]
#[path = "expander_tests.rs"]
mod tests;
