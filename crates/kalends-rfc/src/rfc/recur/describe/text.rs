//! Formatting helpers shared by the describers and by event phrasing.

use chrono::{Datelike, NaiveDate};

use super::locale::{Locale, fill};
use crate::rfc::recur::core::Weekday;

impl Locale {
    /// Joins items as "A, B and C".
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, items: &[S]) -> String {
        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [init @ .., last] => {
                let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
                format!(
                    "{}{}{}",
                    head.join(self.phrases.list_separator),
                    self.phrases.list_last,
                    last.as_ref()
                )
            }
        }
    }

    /// "1st", "2nd", "last", ...
    #[must_use]
    pub fn to_ordinal(&self, n: i64) -> String {
        (self.ordinal)(n)
    }

    /// "the 1st", "the last", ...
    #[must_use]
    pub fn to_the_ordinal(&self, n: i64) -> String {
        fill(self.phrases.the_ordinal, &[("ordinal", &self.to_ordinal(n))])
    }

    #[must_use]
    pub fn weekday_name(&self, weekday: Weekday, plural: bool) -> &'static str {
        let names = if plural {
            &self.weekday_names_plural
        } else {
            &self.weekday_names
        };
        names[weekday.index()]
    }

    /// Name of `month` (1 = January). Out-of-range months wrap around the
    /// year, so 0 is December and 13 is January.
    #[must_use]
    pub fn month_name(&self, month: i64) -> &'static str {
        // rem_euclid(12) is always in 0..12
        let index = usize::try_from((month.rem_euclid(12) + 11) % 12).unwrap_or_default();
        self.month_names[index]
    }

    /// "29th of March 1990"
    #[must_use]
    pub fn date_dmy(&self, date: NaiveDate) -> String {
        fill(
            self.phrases.date_dmy,
            &[
                ("day", &self.to_ordinal(i64::from(date.day()))),
                ("month", self.month_name(i64::from(date.month()))),
                ("year", &date.year().to_string()),
            ],
        )
    }

    /// "Tuesday 9th of January 1990"
    #[must_use]
    pub fn date_full(&self, date: NaiveDate) -> String {
        fill(
            self.phrases.date_full,
            &[
                ("weekday", self.weekday_name(date.weekday().into(), false)),
                ("date", &self.date_dmy(date)),
            ],
        )
    }
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::recur::describe::ENGLISH;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn join_lists() {
        let empty: [&str; 0] = [];
        assert_eq!(ENGLISH.join(&empty), "");
        assert_eq!(ENGLISH.join(&["Monday"]), "Monday");
        assert_eq!(ENGLISH.join(&["Monday", "Friday"]), "Monday and Friday");
        assert_eq!(
            ENGLISH.join(&["Mondays", "Wednesdays", "Fridays"]),
            "Mondays, Wednesdays and Fridays"
        );
    }

    #[test]
    fn month_names_wrap() {
        assert_eq!(ENGLISH.month_name(1), "January");
        assert_eq!(ENGLISH.month_name(12), "December");
        assert_eq!(ENGLISH.month_name(0), "December");
        assert_eq!(ENGLISH.month_name(13), "January");
        assert_eq!(ENGLISH.month_name(i64::MIN), "July");
        assert_eq!(ENGLISH.month_name(i64::MAX), "June");
    }

    #[test]
    fn date_formats() {
        assert_eq!(ENGLISH.date_dmy(date(1990, 3, 29)), "29th of March 1990");
        assert_eq!(ENGLISH.date_dmy(date(1990, 3, 1)), "1st of March 1990");
        assert_eq!(
            ENGLISH.date_full(date(1990, 1, 9)),
            "Tuesday 9th of January 1990"
        );
    }

    #[test]
    fn the_ordinal_and_capitalize() {
        assert_eq!(ENGLISH.to_the_ordinal(15), "the 15th");
        assert_eq!(ENGLISH.to_the_ordinal(-1), "the last");
        assert_eq!(capitalize("the 1st"), "The 1st");
        assert_eq!(capitalize(""), "");
    }
}
