/// Name shared by the binary, the config file and the env prefix.
pub const APP_NAME: &str = "kalends";
pub const CONFIG_FILE_NAME: &str = const_str::concat!(APP_NAME, ".toml");

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_WEEK_START: &str = "MO";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Upper bound on occurrences listed for rules with no COUNT or UNTIL.
pub const DEFAULT_OCCURRENCE_LIMIT: usize = 1000;

/// Two-letter weekday codes (RFC 5545 §3.3.10), Monday first.
pub const WEEKDAY_CODES: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];
