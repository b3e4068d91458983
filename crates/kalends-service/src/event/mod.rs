//! Event-level operations over recurrence rules.
//!
//! - `recurring`: Multi-day recurring events and their spans
//! - `overrides`: Reschedules and cancellations of single occurrences
//! - `schedule`: An event with its overrides applied
//! - `time`: Time-of-day phrasing

mod overrides;
mod recurring;
mod schedule;
mod time;

pub use self::overrides::{Cancellation, Reschedule};
pub use self::recurring::{RecurringEvent, Span, parse_repeat};
pub use self::schedule::{Schedule, ScheduledSpan, SpanKind};
pub use self::time::{time_format, time_phrase};
