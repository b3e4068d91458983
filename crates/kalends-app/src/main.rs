mod commands;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use kalends_core::config::load_config;
use kalends_rfc::rfc::recur::Locale;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kalends")]
#[command(about = "Expand and describe calendar repeat rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a rule in words
    Describe {
        /// Rule text, e.g. "DTSTART:19900102\nRRULE:FREQ=WEEKLY;BYDAY=TU"
        rule: String,

        /// Describe the day this many days into each occurrence
        #[arg(long, default_value_t = 0)]
        offset: i64,

        /// Number of days each occurrence lasts
        #[arg(long, default_value_t = 1)]
        days: u32,

        /// Start time (HH:MM)
        #[arg(long)]
        from: Option<NaiveTime>,

        /// Finish time (HH:MM)
        #[arg(long)]
        to: Option<NaiveTime>,
    },
    /// List occurrence dates
    List {
        rule: String,

        /// Only dates on or after this one (YYYY-MM-DD)
        #[arg(long)]
        after: Option<NaiveDate>,

        /// Only dates on or before this one (YYYY-MM-DD)
        #[arg(long)]
        before: Option<NaiveDate>,

        /// Stop after this many dates (defaults to calendar.occurrence_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Check whether a date is an occurrence
    Check { rule: String, date: NaiveDate },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let locale = Locale::lookup(&config.calendar.locale).unwrap_or_else(|| {
        tracing::warn!(locale = %config.calendar.locale, "Unknown locale, using fallback");
        Locale::fallback()
    });

    match cli.command {
        Commands::Describe {
            rule,
            offset,
            days,
            from,
            to,
        } => commands::describe(&rule, &config.calendar, locale, offset, days, (from, to)),
        Commands::List {
            rule,
            after,
            before,
            limit,
        } => {
            let limit = limit.unwrap_or(config.calendar.occurrence_limit);
            commands::list(&rule, &config.calendar, after, before, limit)
        }
        Commands::Check { rule, date } => commands::check(&rule, &config.calendar, date),
    }
}
