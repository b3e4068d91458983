//! An event together with its overrides.

use chrono::{NaiveDate, NaiveTime};

use super::overrides::{Cancellation, Reschedule};
use super::recurring::{RecurringEvent, Span};
use crate::error::{ServiceError, ServiceResult};

/// Why a span is on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Produced by the event's rule.
    Scheduled,
    /// Moved here from the occurrence on `from`.
    Rescheduled { from: NaiveDate },
}

/// One entry of a schedule listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSpan {
    pub span: Span,
    pub title: String,
    pub kind: SpanKind,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
}

/// A recurring event with its reschedules and cancellations applied.
#[derive(Debug, Clone)]
pub struct Schedule {
    event: RecurringEvent,
    reschedules: Vec<Reschedule>,
    cancellations: Vec<Cancellation>,
}

impl Schedule {
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if the event is invalid.
    pub fn new(event: RecurringEvent) -> ServiceResult<Self> {
        event.validate()?;
        Ok(Self {
            event,
            reschedules: Vec::new(),
            cancellations: Vec::new(),
        })
    }

    #[must_use]
    pub fn event(&self) -> &RecurringEvent {
        &self.event
    }

    #[must_use]
    pub fn reschedules(&self) -> &[Reschedule] {
        &self.reschedules
    }

    #[must_use]
    pub fn cancellations(&self) -> &[Cancellation] {
        &self.cancellations
    }

    /// ## Summary
    /// Adds a reschedule after validating it against the event.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotAnOccurrence` if the overridden date is not
    /// an occurrence, or `ServiceError::ValidationError` if that occurrence
    /// is already overridden.
    pub fn with_reschedule(mut self, reschedule: Reschedule) -> ServiceResult<Self> {
        reschedule.validate(&self.event)?;
        self.check_not_overridden(reschedule.except_date)?;
        tracing::debug!(except_date = %reschedule.except_date, date = %reschedule.date, "Added reschedule");
        self.reschedules.push(reschedule);
        Ok(self)
    }

    /// ## Summary
    /// Adds a cancellation after validating it against the event.
    ///
    /// ## Errors
    /// Same as [`Schedule::with_reschedule`].
    pub fn with_cancellation(mut self, cancellation: Cancellation) -> ServiceResult<Self> {
        cancellation.validate(&self.event)?;
        self.check_not_overridden(cancellation.except_date)?;
        tracing::debug!(except_date = %cancellation.except_date, "Added cancellation");
        self.cancellations.push(cancellation);
        Ok(self)
    }

    fn check_not_overridden(&self, date: NaiveDate) -> ServiceResult<()> {
        if self.is_overridden(date) {
            return Err(ServiceError::ValidationError(format!(
                "the occurrence on {date} already has an override"
            )));
        }
        Ok(())
    }

    fn is_overridden(&self, date: NaiveDate) -> bool {
        self.reschedules.iter().any(|r| r.except_date == date)
            || self.cancellations.iter().any(|c| c.except_date == date)
    }

    /// ## Summary
    /// Every span on the calendar that overlaps `from..=to`, in start order.
    ///
    /// Cancelled occurrences are left out and rescheduled ones appear on
    /// their new dates.
    #[must_use]
    pub fn days_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<ScheduledSpan> {
        let scheduled = self
            .event
            .occurrences_between(from, to)
            .into_iter()
            .filter(|span| !self.is_overridden(span.start))
            .map(|span| ScheduledSpan {
                span,
                title: self.event.title.clone(),
                kind: SpanKind::Scheduled,
                time_from: self.event.time_from,
                time_to: self.event.time_to,
            });
        let moved = self
            .reschedules
            .iter()
            .filter(|r| r.span().overlaps(from, to))
            .map(|r| ScheduledSpan {
                span: r.span(),
                title: r.title.clone(),
                kind: SpanKind::Rescheduled {
                    from: r.except_date,
                },
                time_from: r.time_from,
                time_to: r.time_to,
            });
        let mut spans: Vec<ScheduledSpan> = scheduled.chain(moved).collect();
        spans.sort_by_key(|entry| entry.span);
        spans
    }

    /// ## Summary
    /// Start of the next span beginning on or after `from`, taking overrides
    /// into account.
    #[must_use]
    pub fn next_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        let scheduled = self
            .event
            .repeat
            .occurrences()
            .skip_while(|date| *date < from)
            .find(|date| !self.is_overridden(*date));
        let moved = self
            .reschedules
            .iter()
            .map(|r| r.date)
            .filter(|date| *date >= from)
            .min();
        match (scheduled, moved) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
