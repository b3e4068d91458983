use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use kalends_core::config::CalendarConfig;
use kalends_rfc::rfc::recur::Locale;
use kalends_service::event::{RecurringEvent, parse_repeat};

/// Rule text given on the command line may use a literal `\n` between lines.
fn rule_text(rule: &str) -> String {
    rule.replace("\\n", "\n")
}

pub fn describe(
    rule: &str,
    calendar: &CalendarConfig,
    locale: &Locale,
    offset: i64,
    days: u32,
    (from, to): (Option<NaiveTime>, Option<NaiveTime>),
) -> Result<()> {
    let repeat = parse_repeat(&rule_text(rule), calendar)?;
    if offset == 0 {
        let event = RecurringEvent::new("", repeat)
            .with_num_days(days)
            .with_times(from, to);
        event.validate()?;
        println!("{}", event.when(locale));
    } else {
        println!("{}", repeat.describe(offset, days, locale));
    }
    Ok(())
}

pub fn list(
    rule: &str,
    calendar: &CalendarConfig,
    after: Option<NaiveDate>,
    before: Option<NaiveDate>,
    limit: usize,
) -> Result<()> {
    let repeat = parse_repeat(&rule_text(rule), calendar)?;
    if !repeat.is_bounded() && before.is_none() {
        tracing::info!(limit, "Rule has no end, listing is capped");
    }
    let dates = repeat
        .occurrences()
        .skip_while(|date| after.is_some_and(|after| *date < after))
        .take_while(|date| before.is_none_or(|before| *date <= before))
        .take(limit);
    for date in dates {
        println!("{date}");
    }
    Ok(())
}

pub fn check(rule: &str, calendar: &CalendarConfig, date: NaiveDate) -> Result<()> {
    let repeat = parse_repeat(&rule_text(rule), calendar)?;
    if repeat.contains(date) {
        println!("{date} is an occurrence");
    } else {
        let next = repeat.after(date, false);
        match next {
            Some(next) => println!("{date} is not an occurrence, next is {next}"),
            None => println!("{date} is not an occurrence"),
        }
    }
    Ok(())
}
