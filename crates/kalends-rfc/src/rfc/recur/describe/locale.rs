//! Locale tables for natural-language descriptions.
//!
//! A [`Locale`] bundles name tables, phrase templates and an ordinal
//! formatter. Templates hold `{key}` placeholders filled by [`fill`].

use kalends_core::constants::DEFAULT_LOCALE;

/// Phrase templates used by the describers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
    pub daily: &'static str,
    /// `{n}`
    pub every_n_days: &'static str,
    /// `{days}`
    pub fortnightly_on: &'static str,
    /// `{n}`, `{days}`
    pub every_n_weeks_on: &'static str,
    pub everyday: &'static str,
    /// `{when}`
    pub every_when: &'static str,
    /// `{when}`
    pub the_when: &'static str,
    /// `{ordinal}`
    pub the_ordinal_day: &'static str,
    /// `{days}`
    pub the_days_day: &'static str,
    /// `{days}`
    pub two_days_before: &'static str,
    /// `{days}`
    pub day_before: &'static str,
    /// `{days}`
    pub day_after: &'static str,
    /// `{days}`
    pub two_days_after: &'static str,
    /// `{ordinal}`
    pub the_ordinal: &'static str,
    pub of_the_month: &'static str,
    /// `{months}`
    pub of_months: &'static str,
    /// `{when}`, `{n}`
    pub every_n_months: &'static str,
    /// `{when}`, `{n}`
    pub every_n_years: &'static str,
    /// `{n}`
    pub for_n_days: &'static str,
    /// `{when}`
    pub until: &'static str,
    /// `{ordinal}`, `{weekday}`
    pub ordinal_weekday: &'static str,
    /// `{weekday}`, `{ordinal}`, `{other}`
    pub weekday_before: &'static str,
    /// `{weekday}`, `{ordinal}`, `{other}`
    pub weekday_after: &'static str,
    /// `{day}`, `{month}`, `{year}`
    pub date_dmy: &'static str,
    /// `{weekday}`, `{date}`
    pub date_full: &'static str,
    /// `{time}`
    pub starting_at: &'static str,
    /// `{time}`
    pub finishing_at: &'static str,
    /// `{hour}`, `{minute}`, `{period}`
    pub time_with_minutes: &'static str,
    /// `{hour}`, `{period}`
    pub time_on_the_hour: &'static str,
    pub am: &'static str,
    pub pm: &'static str,
    /// Separator between all but the last two items of a list.
    pub list_separator: &'static str,
    /// Separator before the last item of a list.
    pub list_last: &'static str,
}

/// Name tables, phrase templates and ordinal rules for one language.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    /// Language code, e.g. `en`.
    pub code: &'static str,
    /// Monday first.
    pub weekday_names: [&'static str; 7],
    pub weekday_names_plural: [&'static str; 7],
    /// January first.
    pub month_names: [&'static str; 12],
    pub phrases: Phrases,
    /// Renders `1` as "1st", `-1` as "last", and so on.
    pub ordinal: fn(i64) -> String,
}

pub static ENGLISH: Locale = Locale {
    code: "en",
    weekday_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    weekday_names_plural: [
        "Mondays",
        "Tuesdays",
        "Wednesdays",
        "Thursdays",
        "Fridays",
        "Saturdays",
        "Sundays",
    ],
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    phrases: Phrases {
        daily: "Daily",
        every_n_days: "Every {n} days",
        fortnightly_on: "Fortnightly on {days}",
        every_n_weeks_on: "Every {n} weeks on {days}",
        everyday: "Everyday",
        every_when: "Every {when}",
        the_when: "The {when}",
        the_ordinal_day: "The {ordinal} day",
        the_days_day: "{days} day",
        two_days_before: "Two days before {days} day",
        day_before: "The day before {days} day",
        day_after: "The day after {days} day",
        two_days_after: "Two days after {days} day",
        the_ordinal: "the {ordinal}",
        of_the_month: "of the month",
        of_months: "of {months}",
        every_n_months: "{when}, every {n} months",
        every_n_years: "{when}, every {n} years",
        for_n_days: "for {n} days",
        until: "(until {when})",
        ordinal_weekday: "{ordinal} {weekday}",
        weekday_before: "{other} before the {ordinal} {weekday}",
        weekday_after: "{other} after the {ordinal} {weekday}",
        date_dmy: "{day} of {month} {year}",
        date_full: "{weekday} {date}",
        starting_at: "starting at {time}",
        finishing_at: "finishing at {time}",
        time_with_minutes: "{hour}:{minute}{period}",
        time_on_the_hour: "{hour}{period}",
        am: "am",
        pm: "pm",
        list_separator: ", ",
        list_last: " and ",
    },
    ordinal: english_ordinal,
};

/// All built-in locales.
pub static LOCALES: [&Locale; 1] = [&ENGLISH];

impl Locale {
    /// ## Summary
    /// Finds a built-in locale by language code.
    ///
    /// Region suffixes are ignored, so `en-GB` and `en_US` both resolve to
    /// English.
    #[must_use]
    pub fn lookup(code: &str) -> Option<&'static Self> {
        let language = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        LOCALES
            .iter()
            .copied()
            .find(|locale| locale.code == language)
    }

    /// The locale used when none is configured.
    #[must_use]
    pub fn fallback() -> &'static Self {
        Self::lookup(DEFAULT_LOCALE).unwrap_or(&ENGLISH)
    }
}

/// ## Summary
/// Substitutes `{key}` placeholders in `template`.
///
/// Unknown placeholders are left as they are.
#[must_use]
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

fn english_ordinal(n: i64) -> String {
    match n {
        -1 => "last".to_string(),
        -2 => "penultimate".to_string(),
        n if n < 0 => format!("{} last", english_ordinal(n.saturating_neg())),
        n => {
            let suffix = if (11..=13).contains(&(n % 100)) {
                "th"
            } else {
                match n % 10 {
                    1 => "st",
                    2 => "nd",
                    3 => "rd",
                    _ => "th",
                }
            };
            format!("{n}{suffix}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_ordinals() {
        let ordinal = ENGLISH.ordinal;
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(-1), "last");
        assert_eq!(ordinal(-2), "penultimate");
        assert_eq!(ordinal(-3), "3rd last");
    }

    #[test]
    fn lookup_ignores_region() {
        let code = |c: &str| Locale::lookup(c).map(|locale| locale.code);
        assert_eq!(code("en"), Some("en"));
        assert_eq!(code("en-GB"), Some("en"));
        assert_eq!(code("EN_us"), Some("en"));
        assert_eq!(code("fr"), None);
        assert_eq!(Locale::fallback().code, "en");
    }

    #[test]
    fn fill_placeholders() {
        assert_eq!(
            fill("Every {n} weeks on {days}", &[("n", "3"), ("days", "Monday")]),
            "Every 3 weeks on Monday"
        );
        assert_eq!(fill("{missing} stays", &[("n", "1")]), "{missing} stays");
    }
}
