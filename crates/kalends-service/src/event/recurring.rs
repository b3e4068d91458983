//! Recurring events that may span several days.

use chrono::{Days, NaiveDate, NaiveTime};
use kalends_core::config::CalendarConfig;
use kalends_core::error::CoreError;
use kalends_rfc::rfc::recur::{Locale, Recurrence, Weekday, parse_with_week_start};
use serde::{Deserialize, Serialize};

use super::time::{join_phrases, time_phrase};
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Parses a stored rule, defaulting its week start to the configured one.
///
/// ## Errors
/// Returns `ServiceError::CoreError` if the configured week start is not a
/// weekday code, and `ServiceError::RfcError` if the rule does not parse.
pub fn parse_repeat(text: &str, calendar: &CalendarConfig) -> ServiceResult<Recurrence> {
    let wkst = Weekday::parse(&calendar.first_day_of_week).ok_or_else(|| {
        CoreError::InvalidConfiguration(format!(
            "calendar.first_day_of_week: unknown weekday code '{}'",
            calendar.first_day_of_week
        ))
    })?;
    Ok(parse_with_week_start(text, wkst)?)
}

/// The days covered by one occurrence of an event, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Span {
    /// A span of `num_days` days starting on `start` (at least one day).
    #[must_use]
    pub fn new(start: NaiveDate, num_days: u32) -> Self {
        let extra = u64::from(num_days.saturating_sub(1));
        let end = start.checked_add_days(Days::new(extra)).unwrap_or(start);
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether any day of the span lies within `from..=to`.
    #[must_use]
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start <= to && from <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// An event that repeats by a rule and lasts `num_days` days each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringEvent {
    pub title: String,
    pub repeat: Recurrence,
    pub num_days: u32,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
}

impl RecurringEvent {
    /// A single-day event with no times.
    #[must_use]
    pub fn new(title: impl Into<String>, repeat: Recurrence) -> Self {
        Self {
            title: title.into(),
            repeat,
            num_days: 1,
            time_from: None,
            time_to: None,
        }
    }

    #[must_use]
    pub fn with_num_days(mut self, num_days: u32) -> Self {
        self.num_days = num_days;
        self
    }

    #[must_use]
    pub fn with_times(mut self, from: Option<NaiveTime>, to: Option<NaiveTime>) -> Self {
        self.time_from = from;
        self.time_to = to;
        self
    }

    /// ## Summary
    /// Checks the event before it is stored.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if the event lasts no days or
    /// a single-day event finishes before it starts.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.num_days == 0 {
            return Err(ServiceError::ValidationError(
                "an event lasts at least one day".to_string(),
            ));
        }
        if let (1, Some(from), Some(to)) = (self.num_days, self.time_from, self.time_to)
            && to < from
        {
            return Err(ServiceError::ValidationError(format!(
                "event finishes at {to} before it starts at {from}"
            )));
        }
        Ok(())
    }

    /// "Tuesday for 3 days (until 29th of March 1990) starting at 10am finishing at 4:30pm"
    #[must_use]
    pub fn when(&self, locale: &Locale) -> String {
        let repeat = self.repeat.describe(0, self.num_days, locale);
        let times = time_phrase(self.time_from, self.time_to, locale);
        join_phrases([repeat.as_str(), times.as_str()])
    }

    /// ## Summary
    /// Describes day `day_index` (zero based) of the event's span, e.g. the
    /// second day of an event held on the 1st is "The 2nd day of the month".
    #[must_use]
    pub fn when_on_day(&self, day_index: u32, locale: &Locale) -> String {
        self.repeat.describe(i64::from(day_index), 1, locale)
    }

    /// First occurrence starting on or after `from`.
    #[must_use]
    pub fn next_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.repeat.after(from, true)
    }

    /// ## Summary
    /// The spans of all occurrences that overlap `from..=to`.
    ///
    /// An occurrence that starts before `from` but is still running on it is
    /// included.
    #[must_use]
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Span> {
        let lead = u64::from(self.num_days.saturating_sub(1));
        let search_from = from.checked_sub_days(Days::new(lead)).unwrap_or(from);
        let spans: Vec<Span> = self
            .repeat
            .between(search_from, to, true)
            .into_iter()
            .map(|start| Span::new(start, self.num_days))
            .filter(|span| span.overlaps(from, to))
            .collect();
        tracing::trace!(title = %self.title, %from, %to, count = spans.len(), "Expanded event");
        spans
    }
}

#[cfg(test)]
#[path = "recurring_tests.rs"]
mod tests;
