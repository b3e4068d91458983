//! The single-clause recurrence rule (RFC 5545 §3.3.10, §3.8.5.3).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::weekday::{Weekday, WeekdayNum};
use crate::error::{RfcError, RfcResult};

/// Recurrence frequency. Sub-daily frequencies are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repeat rule over whole days.
///
/// Built through [`RecurrenceBuilder`] or parsed from its text form; immutable
/// afterwards. Selector sets are stored sorted and de-duplicated, so two rules
/// with the same meaning compare equal regardless of input order.
///
/// Setting both `count` and `until` is allowed but discouraged: expansion
/// stops at whichever bound is reached first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub(crate) dtstart: Option<NaiveDate>,
    pub(crate) freq: Frequency,
    pub(crate) interval: u32,
    pub(crate) count: Option<u32>,
    pub(crate) until: Option<NaiveDate>,
    pub(crate) wkst: Weekday,
    pub(crate) by_setpos: Vec<i16>,
    pub(crate) by_weekday: Vec<WeekdayNum>,
    pub(crate) by_month: Vec<u8>,
    pub(crate) by_monthday: Vec<i8>,
    pub(crate) by_yearday: Vec<i16>,
    pub(crate) by_weekno: Vec<i8>,
}

impl Recurrence {
    /// Starts a rule with the given frequency.
    #[must_use]
    pub fn builder(freq: Frequency) -> RecurrenceBuilder {
        RecurrenceBuilder::new(freq)
    }

    /// Starts a daily rule.
    #[must_use]
    pub fn daily() -> RecurrenceBuilder {
        RecurrenceBuilder::new(Frequency::Daily)
    }

    /// Starts a weekly rule.
    #[must_use]
    pub fn weekly() -> RecurrenceBuilder {
        RecurrenceBuilder::new(Frequency::Weekly)
    }

    /// Starts a monthly rule.
    #[must_use]
    pub fn monthly() -> RecurrenceBuilder {
        RecurrenceBuilder::new(Frequency::Monthly)
    }

    /// Starts a yearly rule.
    #[must_use]
    pub fn yearly() -> RecurrenceBuilder {
        RecurrenceBuilder::new(Frequency::Yearly)
    }

    /// Reopens this rule as a builder, e.g. to change one field.
    #[must_use]
    pub fn to_builder(&self) -> RecurrenceBuilder {
        RecurrenceBuilder {
            dtstart: self.dtstart,
            freq: self.freq,
            interval: self.interval,
            count: self.count,
            until: self.until,
            wkst: self.wkst,
            by_setpos: self.by_setpos.iter().copied().map(i32::from).collect(),
            by_weekday: self.by_weekday.clone(),
            by_month: self.by_month.iter().copied().map(i32::from).collect(),
            by_monthday: self.by_monthday.iter().copied().map(i32::from).collect(),
            by_yearday: self.by_yearday.iter().copied().map(i32::from).collect(),
            by_weekno: self.by_weekno.iter().copied().map(i32::from).collect(),
        }
    }

    /// The recurrence start date, if one was given.
    #[must_use]
    pub fn dtstart(&self) -> Option<NaiveDate> {
        self.dtstart
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.freq
    }

    /// How many periods of `frequency` lie between repeats (always >= 1).
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// The last occurrence is the greatest date that is less than or equal to this.
    #[must_use]
    pub fn until(&self) -> Option<NaiveDate> {
        self.until
    }

    /// The week start day.
    #[must_use]
    pub fn week_start(&self) -> Weekday {
        self.wkst
    }

    /// Weekday selectors: plain weekdays first, then ordinal-qualified ones.
    #[must_use]
    pub fn by_weekday(&self) -> &[WeekdayNum] {
        &self.by_weekday
    }

    /// Month-day selectors: positive days first, then days counted from month end.
    #[must_use]
    pub fn by_monthday(&self) -> &[i8] {
        &self.by_monthday
    }

    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    #[must_use]
    pub fn by_yearday(&self) -> &[i16] {
        &self.by_yearday
    }

    #[must_use]
    pub fn by_weekno(&self) -> &[i8] {
        &self.by_weekno
    }

    #[must_use]
    pub fn by_setpos(&self) -> &[i16] {
        &self.by_setpos
    }

    /// Alias of [`Recurrence::by_setpos`].
    #[must_use]
    pub fn by_set_position(&self) -> &[i16] {
        &self.by_setpos
    }

    /// Whether the sequence of occurrences is finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.count.is_some() || self.until.is_some()
    }

    /// Returns a copy anchored on `dtstart`, with the selector defaults that
    /// anchor implies filled in.
    #[must_use]
    pub(crate) fn anchored(&self, dtstart: NaiveDate) -> Self {
        let mut rule = self.clone();
        rule.dtstart = Some(dtstart);
        rule.apply_start_defaults();
        rule
    }

    /// With no day selector at all, the rule repeats on the start date's
    /// position within each period.
    fn apply_start_defaults(&mut self) {
        let Some(start) = self.dtstart else {
            return;
        };
        if !(self.by_weekday.is_empty()
            && self.by_monthday.is_empty()
            && self.by_yearday.is_empty()
            && self.by_weekno.is_empty())
        {
            return;
        }
        // chrono guarantees day in 1..=31 and month in 1..=12
        let day = i8::try_from(start.day()).unwrap_or(1);
        let month = u8::try_from(start.month()).unwrap_or(1);
        match self.freq {
            Frequency::Yearly => {
                if self.by_month.is_empty() {
                    self.by_month = vec![month];
                }
                self.by_monthday = vec![day];
            }
            Frequency::Monthly => self.by_monthday = vec![day],
            Frequency::Weekly => {
                self.by_weekday = vec![WeekdayNum::every(start.weekday().into())];
            }
            Frequency::Daily => {}
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::rfc::recur::build::serialize(self))
    }
}

impl FromStr for Recurrence {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::rfc::recur::parse::parse(s)
    }
}

impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Field-by-field construction of a [`Recurrence`].
///
/// Values are range-checked and normalised by [`RecurrenceBuilder::build`].
#[derive(Debug, Clone)]
pub struct RecurrenceBuilder {
    dtstart: Option<NaiveDate>,
    freq: Frequency,
    interval: u32,
    count: Option<u32>,
    until: Option<NaiveDate>,
    wkst: Weekday,
    by_setpos: Vec<i32>,
    by_weekday: Vec<WeekdayNum>,
    by_month: Vec<i32>,
    by_monthday: Vec<i32>,
    by_yearday: Vec<i32>,
    by_weekno: Vec<i32>,
}

impl RecurrenceBuilder {
    /// Creates a builder with interval 1 and a Monday week start.
    #[must_use]
    pub fn new(freq: Frequency) -> Self {
        Self {
            dtstart: None,
            freq,
            interval: 1,
            count: None,
            until: None,
            wkst: Weekday::Monday,
            by_setpos: Vec::new(),
            by_weekday: Vec::new(),
            by_month: Vec::new(),
            by_monthday: Vec::new(),
            by_yearday: Vec::new(),
            by_weekno: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dtstart(mut self, dtstart: NaiveDate) -> Self {
        self.dtstart = Some(dtstart);
        self
    }

    #[must_use]
    pub fn with_frequency(mut self, freq: Frequency) -> Self {
        self.freq = freq;
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the count. Unlike RFC 5545, an existing `until` is kept.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the (inclusive) until date. An existing `count` is kept.
    #[must_use]
    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    #[must_use]
    pub fn with_wkst(mut self, wkst: Weekday) -> Self {
        self.wkst = wkst;
        self
    }

    #[must_use]
    pub fn with_by_weekday(mut self, days: impl IntoIterator<Item = WeekdayNum>) -> Self {
        self.by_weekday = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_month(mut self, months: impl IntoIterator<Item = i32>) -> Self {
        self.by_month = months.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_monthday(mut self, days: impl IntoIterator<Item = i32>) -> Self {
        self.by_monthday = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_yearday(mut self, days: impl IntoIterator<Item = i32>) -> Self {
        self.by_yearday = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_weekno(mut self, weeks: impl IntoIterator<Item = i32>) -> Self {
        self.by_weekno = weeks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_setpos(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.by_setpos = positions.into_iter().collect();
        self
    }

    /// ## Summary
    /// Validates and normalises the fields into a [`Recurrence`].
    ///
    /// Ordinals on weekday selectors are dropped for daily and weekly rules,
    /// where they have no meaning.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` if the interval or count is zero or
    /// a selector value is out of range.
    pub fn build(self) -> RfcResult<Recurrence> {
        if self.interval == 0 {
            return Err(RfcError::ValidationError(
                "INTERVAL must be at least 1".to_string(),
            ));
        }
        if self.count == Some(0) {
            return Err(RfcError::ValidationError(
                "COUNT must be at least 1".to_string(),
            ));
        }

        let by_weekday = if matches!(self.freq, Frequency::Daily | Frequency::Weekly) {
            self.by_weekday.iter().map(|d| d.plain()).collect()
        } else {
            self.by_weekday
        };

        let mut rule = Recurrence {
            dtstart: self.dtstart,
            freq: self.freq,
            interval: self.interval,
            count: self.count,
            until: self.until,
            wkst: self.wkst,
            by_setpos: checked_set("BYSETPOS", &self.by_setpos, 366, true)?,
            by_weekday: sorted_set(by_weekday),
            by_month: checked_set("BYMONTH", &self.by_month, 12, false)?,
            by_monthday: checked_monthdays(&self.by_monthday)?,
            by_yearday: checked_set("BYYEARDAY", &self.by_yearday, 366, true)?,
            by_weekno: checked_set("BYWEEKNO", &self.by_weekno, 53, true)?,
        };
        rule.apply_start_defaults();

        if rule.count.is_some() && rule.until.is_some() {
            tracing::warn!(rule = %rule, "Rule sets both COUNT and UNTIL");
        }
        tracing::debug!(rule = %rule, "Built recurrence rule");
        Ok(rule)
    }
}

/// Range-checks `values` against 1..=max (and -max..=-1 when `signed`),
/// then sorts and de-duplicates them.
fn checked_set<T>(name: &str, values: &[i32], max: i32, signed: bool) -> RfcResult<Vec<T>>
where
    T: TryFrom<i32> + Ord,
{
    let mut out = Vec::with_capacity(values.len());
    for &value in values {
        let in_range = (1..=max).contains(&value) || (signed && (-max..=-1).contains(&value));
        let converted = T::try_from(value).ok().filter(|_| in_range).ok_or_else(|| {
            let range = if signed {
                format!("±1..={max}")
            } else {
                format!("1..={max}")
            };
            RfcError::ValidationError(format!("{name} value {value} is outside {range}"))
        })?;
        out.push(converted);
    }
    Ok(sorted_set(out))
}

/// Month days keep positive days ahead of days counted from month end.
fn checked_monthdays(values: &[i32]) -> RfcResult<Vec<i8>> {
    let days: Vec<i8> = checked_set("BYMONTHDAY", values, 31, true)?;
    let (mut from_start, from_end): (Vec<i8>, Vec<i8>) = days.into_iter().partition(|d| *d > 0);
    from_start.extend(from_end);
    Ok(from_start)
}

fn sorted_set<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values.dedup();
    values
}
