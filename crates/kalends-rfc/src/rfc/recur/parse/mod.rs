//! Recurrence parsing.
//!
//! The grammar is the RFC 5545 recurrence text form restricted to one
//! clause: an optional `DTSTART` line and one `RRULE` line.

mod error;
mod parser;
pub mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::{parse, parse_with_week_start};
