//! Recurrence serialization.
//!
//! - Serializer: canonical `DTSTART` / `RRULE` text with a fixed part order

mod serializer;

pub use serializer::{serialize, serialize_rrule};
