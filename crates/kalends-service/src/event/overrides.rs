//! Overrides of a single occurrence: reschedules and cancellations.

use chrono::{NaiveDate, NaiveTime};
use kalends_rfc::rfc::recur::Locale;
use kalends_rfc::rfc::recur::describe::fill;
use serde::{Deserialize, Serialize};

use super::recurring::{RecurringEvent, Span};
use super::time::{join_phrases, time_phrase};
use crate::error::{ServiceError, ServiceResult};

/// The `except_date` of an override must be a date the event falls on.
fn check_except_date(except_date: NaiveDate, event: &RecurringEvent) -> ServiceResult<()> {
    if event.repeat.contains(except_date) {
        Ok(())
    } else {
        tracing::debug!(title = %event.title, %except_date, "Override does not match an occurrence");
        Err(ServiceError::NotAnOccurrence(except_date))
    }
}

/// Moves one occurrence to another date, length or time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reschedule {
    /// The occurrence being replaced.
    pub except_date: NaiveDate,
    pub title: String,
    pub date: NaiveDate,
    pub num_days: u32,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
}

impl Reschedule {
    /// Moves the occurrence on `except_date` to a single day on `date`.
    #[must_use]
    pub fn new(except_date: NaiveDate, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            except_date,
            title: title.into(),
            date,
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

    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.date, self.num_days)
    }

    /// "Tuesday 9th of January 1990 for 3 days starting at 1pm finishing at 7:30pm"
    #[must_use]
    pub fn when(&self, locale: &Locale) -> String {
        let date = locale.date_full(self.date);
        let days = if self.num_days >= 2 {
            fill(
                locale.phrases.for_n_days,
                &[("n", &self.num_days.to_string())],
            )
        } else {
            String::new()
        };
        let times = time_phrase(self.time_from, self.time_to, locale);
        join_phrases([date.as_str(), days.as_str(), times.as_str()])
    }

    /// ## Summary
    /// Checks the reschedule against the event it overrides.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotAnOccurrence` if `except_date` is not an
    /// occurrence of `event`, and `ServiceError::ValidationError` if the new
    /// occurrence lasts no days.
    pub fn validate(&self, event: &RecurringEvent) -> ServiceResult<()> {
        if self.num_days == 0 {
            return Err(ServiceError::ValidationError(
                "a rescheduled occurrence lasts at least one day".to_string(),
            ));
        }
        check_except_date(self.except_date, event)
    }
}

/// Drops one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub except_date: NaiveDate,
    /// Shown in place of the cancelled occurrence, if set.
    pub title: Option<String>,
}

impl Cancellation {
    #[must_use]
    pub fn new(except_date: NaiveDate) -> Self {
        Self {
            except_date,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// ## Errors
    /// Returns `ServiceError::NotAnOccurrence` if `except_date` is not an
    /// occurrence of `event`.
    pub fn validate(&self, event: &RecurringEvent) -> ServiceResult<()> {
        check_except_date(self.except_date, event)
    }
}
