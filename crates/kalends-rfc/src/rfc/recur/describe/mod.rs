//! Natural-language descriptions of rules and weekday selectors.
//!
//! Every phrase comes from an explicit [`Locale`] passed by the caller.

mod locale;
mod rule;
mod text;
mod weekday;

pub use self::locale::{ENGLISH, LOCALES, Locale, Phrases, fill};
pub use self::text::capitalize;
