//! Recurrence engine for calendar events.
//!
//! Models single-clause RFC 5545 repeat rules over whole days, expands them
//! into occurrence dates and renders them as natural-language phrases.

pub mod error;
pub mod rfc;
