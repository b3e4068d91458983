use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_OCCURRENCE_LIMIT,
    DEFAULT_WEEK_START, WEEKDAY_CODES,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Two-letter code of the default week start (`WKST`) for new rules.
    pub first_day_of_week: String,
    /// Locale table used for natural-language descriptions.
    pub locale: String,
    /// Cap applied when listing occurrences of an unbounded rule.
    pub occurrence_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `kalends.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(environment())
    }

    fn load_from(env: config::Environment) -> Result<Self> {
        let default_limit = u64::try_from(DEFAULT_OCCURRENCE_LIMIT)?;
        Ok(Config::builder()
            .set_default("calendar.first_day_of_week", DEFAULT_WEEK_START)?
            .set_default("calendar.locale", DEFAULT_LOCALE)?
            .set_default("calendar.occurrence_limit", default_limit)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        let wkst = self.calendar.first_day_of_week.to_ascii_uppercase();
        if !WEEKDAY_CODES.contains(&wkst.as_str()) {
            return Err(CoreError::InvalidConfiguration(format!(
                "calendar.first_day_of_week: unknown weekday code '{}'",
                self.calendar.first_day_of_week
            )));
        }
        if self.calendar.locale.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "calendar.locale must not be empty".to_string(),
            ));
        }
        if self.calendar.occurrence_limit == 0 {
            return Err(CoreError::InvalidConfiguration(
                "calendar.occurrence_limit must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig {
                first_day_of_week: DEFAULT_WEEK_START.to_string(),
                locale: DEFAULT_LOCALE.to_string(),
                occurrence_limit: DEFAULT_OCCURRENCE_LIMIT,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

/// Env source: `KALENDS_<SECTION>__<KEY>`, e.g. `KALENDS_CALENDAR__FIRST_DAY_OF_WEEK=SU`.
///
/// The double underscore keeps snake-case keys such as `first_day_of_week` intact.
fn environment() -> config::Environment {
    config::Environment::with_prefix(&APP_NAME.to_ascii_uppercase())
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file, then
/// validates it.
///
/// ## Errors
/// Returns an error if loading, deserializing or validating the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    settings.validate()?;
    tracing::debug!(?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
