//! Days of the week and ordinal-qualified weekday descriptors (RFC 5545 §3.3.10 BYDAY).

use std::fmt;

use kalends_core::constants::WEEKDAY_CODES;

use crate::error::{RfcError, RfcResult};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        WEEKDAY_CODES[self.index()]
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.to_ascii_uppercase();
        WEEKDAY_CODES
            .iter()
            .position(|code| *code == upper)
            .and_then(Self::from_index)
    }

    /// Returns all weekdays in order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Zero-based position, 0 = Monday .. 6 = Sunday.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 7 {
            Some(Self::all()[index])
        } else {
            None
        }
    }

    /// The weekday `days` away, wrapping around the week in either direction.
    #[must_use]
    pub fn shifted(self, days: i64) -> Self {
        // both terms are in 0..7
        let index = (i64::from(self as u8) + days.rem_euclid(7)).rem_euclid(7).unsigned_abs();
        Self::all()[usize::try_from(index).unwrap_or_default()]
    }

    /// Days from `start` forward to `self` (0..=6).
    #[must_use]
    pub fn days_since(self, start: Self) -> u32 {
        (u32::from(self as u8) + 7 - u32::from(start as u8)) % 7
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// Weekday with optional occurrence number.
///
/// Used in BYDAY rule part. Examples:
/// - `MO` - every Monday
/// - `+2TU` - second Tuesday of the month/year
/// - `-1FR` - last Friday of the month/year
///
/// Ordering puts plain weekdays before ordinal-qualified ones, which is the
/// order a rule stores and describes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayNum {
    /// The day of the week.
    pub weekday: Weekday,
    /// Optional occurrence number (-53 to 53, excluding 0).
    pub ordinal: Option<i8>,
}

pub const MO: WeekdayNum = WeekdayNum::every(Weekday::Monday);
pub const TU: WeekdayNum = WeekdayNum::every(Weekday::Tuesday);
pub const WE: WeekdayNum = WeekdayNum::every(Weekday::Wednesday);
pub const TH: WeekdayNum = WeekdayNum::every(Weekday::Thursday);
pub const FR: WeekdayNum = WeekdayNum::every(Weekday::Friday);
pub const SA: WeekdayNum = WeekdayNum::every(Weekday::Saturday);
pub const SU: WeekdayNum = WeekdayNum::every(Weekday::Sunday);

/// The seven plain weekdays, Monday first.
pub const EVERY_WEEKDAY: [WeekdayNum; 7] = [MO, TU, WE, TH, FR, SA, SU];

impl WeekdayNum {
    /// Creates a weekday occurrence without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: None,
        }
    }

    /// Returns this weekday qualified by `n` (`TU.nth(2)` is the 2nd Tuesday).
    ///
    /// `n == 0` yields the plain weekday.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` if `n` is outside -53..=53.
    pub fn nth(self, n: i32) -> RfcResult<Self> {
        if n == 0 {
            return Ok(Self::every(self.weekday));
        }
        let ordinal = i8::try_from(n)
            .ok()
            .filter(|n| (-53..=53).contains(n))
            .ok_or_else(|| {
                RfcError::ValidationError(format!("weekday ordinal {n} is outside -53..=53"))
            })?;
        Ok(Self {
            weekday: self.weekday,
            ordinal: Some(ordinal),
        })
    }

    /// Drops the ordinal, keeping the day of the week.
    #[must_use]
    pub const fn plain(self) -> Self {
        Self::every(self.weekday)
    }

    /// Whether this is an every-week selector (no ordinal).
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.ordinal.is_none()
    }

    /// Canonical code: `TU`, `+2TU`, `-1FR`.
    #[must_use]
    pub fn code(&self) -> String {
        match self.ordinal {
            Some(n) => format!("{n:+}{}", self.weekday),
            None => self.weekday.as_str().to_string(),
        }
    }

    fn sort_key(self) -> (bool, Weekday, i8) {
        (self.ordinal.is_some(), self.weekday, self.ordinal.unwrap_or(0))
    }
}

impl PartialOrd for WeekdayNum {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeekdayNum {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl From<Weekday> for WeekdayNum {
    fn from(weekday: Weekday) -> Self {
        Self::every(weekday)
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}
