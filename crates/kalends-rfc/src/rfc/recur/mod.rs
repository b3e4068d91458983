//! Recurrence rules (RFC 5545 §3.3.10) restricted to a single clause of
//! whole-day frequencies.
//!
//! - `core`: Weekday descriptors and the `Recurrence` rule type
//! - `parse`: Parser for the `DTSTART`/`RRULE` text form
//! - `build`: Serializer for the canonical text form
//! - `expand`: Lazy occurrence expansion and range queries
//! - `describe`: Natural-language rendering with explicit locale tables
//!
//! ## Example
//!
//! ```rust
//! use kalends_rfc::rfc::recur::{Recurrence, ENGLISH};
//!
//! let rule: Recurrence = "DTSTART:19900102\nRRULE:FREQ=WEEKLY;BYDAY=TU;UNTIL=19900329"
//!     .parse()
//!     .expect("valid rule");
//! assert_eq!(rule.describe(0, 1, &ENGLISH), "Tuesday (until 29th of March 1990)");
//! assert_eq!(rule.occurrences().count(), 13);
//! ```

pub mod build;
pub mod core;
pub mod describe;
pub mod expand;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used items at module level
pub use self::build::serialize;
pub use self::core::{
    EVERY_WEEKDAY, FR, Frequency, MO, Recurrence, RecurrenceBuilder, SA, SU, TH, TU, WE, Weekday,
    WeekdayNum,
};
pub use self::describe::{ENGLISH, Locale};
pub use self::expand::Occurrences;
pub use self::parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_with_week_start};
