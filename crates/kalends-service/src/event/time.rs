//! Time-of-day phrasing: "10am", "4:30pm", "starting at 1pm finishing at 7:30pm".

use chrono::{NaiveTime, Timelike};
use kalends_rfc::rfc::recur::Locale;
use kalends_rfc::rfc::recur::describe::fill;

/// Formats a time on the twelve-hour clock, leaving out zero minutes.
#[must_use]
pub fn time_format(time: NaiveTime, locale: &Locale) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm {
        locale.phrases.pm
    } else {
        locale.phrases.am
    };
    let hour = hour.to_string();
    if time.minute() == 0 {
        fill(
            locale.phrases.time_on_the_hour,
            &[("hour", &hour), ("period", period)],
        )
    } else {
        fill(
            locale.phrases.time_with_minutes,
            &[
                ("hour", &hour),
                ("minute", &format!("{:02}", time.minute())),
                ("period", period),
            ],
        )
    }
}

/// ## Summary
/// Phrases an optional start and finish time.
///
/// Returns an empty string when neither is set.
#[must_use]
pub fn time_phrase(from: Option<NaiveTime>, to: Option<NaiveTime>, locale: &Locale) -> String {
    let starting = from.map(|time| {
        fill(
            locale.phrases.starting_at,
            &[("time", &time_format(time, locale))],
        )
    });
    let finishing = to.map(|time| {
        fill(
            locale.phrases.finishing_at,
            &[("time", &time_format(time, locale))],
        )
    });
    [starting, finishing]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joins non-empty phrases with single spaces.
pub(crate) fn join_phrases<'a>(phrases: impl IntoIterator<Item = &'a str>) -> String {
    phrases
        .into_iter()
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
