//! Calendar events built on recurrence rules: multi-day recurring events,
//! their reschedule and cancellation overrides, and the combined schedule.

pub mod error;
pub mod event;
