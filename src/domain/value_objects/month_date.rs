//! Month-granular calendar date.
//!
//! Subscriptions are exchanged as `YYYY-MM` strings and stored as the first
//! day of that month. [`MonthDate`] is the only way to obtain such a date, so
//! a value of this type is always truncated to the 1st.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire format of a month date.
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Errors produced while parsing a `YYYY-MM` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthDateError {
    /// The string is not shaped like `YYYY-MM`.
    #[error("invalid month format '{0}', expected YYYY-MM")]
    InvalidFormat(String),
    /// The month component is outside `01..=12`.
    #[error("invalid month '{0}', month must be between 01 and 12")]
    InvalidMonth(String),
}

/// A calendar date fixed to the first day of its month.
///
/// # Examples
///
/// ```rust
/// use subscription_aggregator::domain::value_objects::MonthDate;
///
/// let month: MonthDate = "2025-09".parse().unwrap();
/// assert_eq!(month.to_string(), "2025-09");
/// assert_eq!(month.last_day().to_string(), "2025-09-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDate(NaiveDate);

impl MonthDate {
    /// Parses a strict `YYYY-MM` string (four-digit year, two-digit month).
    ///
    /// # Errors
    ///
    /// Returns [`MonthDateError`] when the string has the wrong shape or the
    /// month is out of range.
    pub fn parse(value: &str) -> Result<Self, MonthDateError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(MonthDateError::InvalidFormat(value.to_string()));
        }

        let year: i32 = value[..4]
            .parse()
            .map_err(|_| MonthDateError::InvalidFormat(value.to_string()))?;
        let month: u32 = value[5..]
            .parse()
            .map_err(|_| MonthDateError::InvalidFormat(value.to_string()))?;

        Self::from_year_month(year, month)
            .ok_or_else(|| MonthDateError::InvalidMonth(value.to_string()))
    }

    /// Builds the first day of the given month, or `None` if the month is invalid.
    #[must_use]
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Truncates an arbitrary date to the first day of its month.
    #[must_use]
    pub fn truncate(date: NaiveDate) -> Self {
        // Day 1 exists in every month.
        Self(date.with_day(1).unwrap_or(date))
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for MonthDate {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.format(MONTH_FORMAT))
    }
}

impl FromStr for MonthDate {
    type Err = MonthDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for MonthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
