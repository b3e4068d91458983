//! Occurrence expansion and range queries.

mod calendar;
mod expander;
mod query;

pub use self::expander::Occurrences;
