//! Natural-language rendering of a whole rule.

use chrono::TimeDelta;

use super::locale::{Locale, fill};
use super::text::capitalize;
use crate::rfc::recur::core::{Frequency, Recurrence, WeekdayNum};

impl Recurrence {
    /// ## Summary
    /// Describes the rule in words, e.g. "Fortnightly on Mondays, Wednesdays
    /// and Fridays" or "The 1st day of the month for 3 days".
    ///
    /// `day_offset` phrases the description for a later (or earlier) day of a
    /// multi-day event: day 2 of an event repeating on the 1st of the month is
    /// "The 2nd day of the month". `num_days` is the length of that event.
    ///
    /// Selectors without a phrasing of their own (year days, week numbers and
    /// set positions) are left out of the text.
    #[must_use]
    pub fn describe(&self, day_offset: i64, num_days: u32, locale: &Locale) -> String {
        let mut text = match self.freq {
            Frequency::Daily => self.describe_daily(locale),
            Frequency::Weekly => self.describe_weekly(day_offset, locale),
            Frequency::Monthly | Frequency::Yearly => {
                self.describe_monthly_or_yearly(day_offset, locale)
            }
        };
        if text.is_empty() {
            tracing::warn!(rule = %self, "No day phrase for rule");
        }

        if num_days >= 2 {
            push_phrase(
                &mut text,
                &fill(locale.phrases.for_n_days, &[("n", &num_days.to_string())]),
            );
        }
        if let Some(until) = self.until {
            let until = TimeDelta::try_days(day_offset)
                .and_then(|delta| until.checked_add_signed(delta))
                .unwrap_or(until);
            push_phrase(
                &mut text,
                &fill(locale.phrases.until, &[("when", &locale.date_dmy(until))]),
            );
        }
        text
    }

    /// Same as `describe(0, 1, locale)`.
    #[must_use]
    pub fn when(&self, locale: &Locale) -> String {
        self.describe(0, 1, locale)
    }

    fn describe_daily(&self, locale: &Locale) -> String {
        if self.interval > 1 {
            fill(
                locale.phrases.every_n_days,
                &[("n", &self.interval.to_string())],
            )
        } else {
            locale.phrases.daily.to_string()
        }
    }

    fn describe_weekly(&self, offset: i64, locale: &Locale) -> String {
        let plural = self.by_weekday.len() > 1;
        let days: Vec<String> = self
            .by_weekday
            .iter()
            .map(|day| day.describe(offset, plural, locale))
            .collect();
        let days = locale.join(&days);
        match self.interval {
            1 => days,
            2 => fill(locale.phrases.fortnightly_on, &[("days", &days)]),
            n => fill(
                locale.phrases.every_n_weeks_on,
                &[("n", &n.to_string()), ("days", &days)],
            ),
        }
    }

    fn describe_monthly_or_yearly(&self, offset: i64, locale: &Locale) -> String {
        let mut of = Some(self.of_phrase(&self.by_month_numbers(), locale));

        let days = if is_every_weekday(&self.by_weekday) {
            of = None;
            locale.phrases.everyday.to_string()
        } else if let Some(first) = self.by_weekday.first() {
            let when: Vec<String> = self
                .by_weekday
                .iter()
                .map(|day| day.describe(offset, false, locale))
                .collect();
            let when = locale.join(&when);
            if first.is_plain() {
                of = None;
                fill(locale.phrases.every_when, &[("when", &when)])
            } else {
                fill(locale.phrases.the_when, &[("when", &when)])
            }
        } else if self.by_monthday.len() > 1 {
            self.describe_month_days(offset, locale)
        } else if let Some(&day) = self.by_monthday.first() {
            let day = i64::from(day);
            let effective = if day == 1 && offset < 0 {
                of = Some(self.of_phrase(&self.wrapped_months(-1), locale));
                offset
            } else if day == -1 && offset > 0 {
                of = Some(self.of_phrase(&self.wrapped_months(1), locale));
                offset
            } else {
                day.saturating_add(offset)
            };
            fill(
                locale.phrases.the_ordinal_day,
                &[("ordinal", &locale.to_ordinal(effective))],
            )
        } else {
            String::new()
        };

        if days.is_empty() {
            return days;
        }
        let mut text = days;
        if let Some(of) = of.filter(|of| !of.is_empty()) {
            push_phrase(&mut text, &of);
        }
        if self.interval >= 2 {
            let template = if self.freq == Frequency::Monthly {
                locale.phrases.every_n_months
            } else {
                locale.phrases.every_n_years
            };
            text = fill(
                template,
                &[("when", &text), ("n", &self.interval.to_string())],
            );
        }
        text
    }

    /// Several month days, each shifted by `offset`.
    fn describe_month_days(&self, offset: i64, locale: &Locale) -> String {
        let days: Vec<String> = self
            .by_monthday
            .iter()
            .map(|day| locale.to_the_ordinal(i64::from(*day)))
            .collect();
        let template = match offset {
            0 => {
                return capitalize(&fill(
                    locale.phrases.the_days_day,
                    &[("days", &locale.join(&days))],
                ));
            }
            -2 => locale.phrases.two_days_before,
            -1 => locale.phrases.day_before,
            1 => locale.phrases.day_after,
            2 => locale.phrases.two_days_after,
            _ => {
                let shifted: Vec<String> =
                    days.iter().map(|day| format!("{day}{offset:+}")).collect();
                return capitalize(&locale.join(&shifted));
            }
        };
        fill(template, &[("days", &locale.join(&days))])
    }

    /// "of the month" for monthly rules, "of March and April" for yearly
    /// ones. Empty when a yearly rule has no month selector.
    fn of_phrase(&self, months: &[i64], locale: &Locale) -> String {
        if self.freq == Frequency::Monthly {
            return locale.phrases.of_the_month.to_string();
        }
        if months.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = months.iter().map(|m| locale.month_name(*m)).collect();
        fill(locale.phrases.of_months, &[("months", &locale.join(&names))])
    }

    fn by_month_numbers(&self) -> Vec<i64> {
        self.by_month.iter().map(|m| i64::from(*m)).collect()
    }

    fn wrapped_months(&self, step: i64) -> Vec<i64> {
        self.by_month.iter().map(|m| i64::from(*m) + step).collect()
    }
}

fn is_every_weekday(days: &[WeekdayNum]) -> bool {
    days.len() == 7 && days.iter().all(|day| day.is_plain())
}

fn push_phrase(text: &mut String, phrase: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(phrase);
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
