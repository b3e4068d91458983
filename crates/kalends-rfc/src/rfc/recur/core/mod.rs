//! Recurrence core models.
//!
//! These types are designed for:
//! - Value semantics: rules and weekday descriptors are immutable once built
//! - Canonical form: selector sets are sorted so equal rules compare equal
//! - Thread safety: nothing here holds interior mutability

mod rule;
mod weekday;

pub use rule::{Frequency, Recurrence, RecurrenceBuilder};
pub use weekday::{EVERY_WEEKDAY, FR, MO, SA, SU, TH, TU, WE, Weekday, WeekdayNum};
