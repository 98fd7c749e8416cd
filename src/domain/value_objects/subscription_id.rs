//! Subscription identifier value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors for [`SubscriptionId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriptionIdError {
    /// The value is not an integer.
    #[error("invalid subscription id '{0}', expected a positive integer")]
    NotAnInteger(String),
    /// The value is zero or negative.
    #[error("invalid subscription id {0}, expected a positive integer")]
    NotPositive(i64),
}

/// Store-assigned identifier of a subscription.
///
/// Ids map onto the `SERIAL` primary key, so only positive 32-bit values are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(i32);

impl SubscriptionId {
    /// Creates an id from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionIdError::NotPositive`] for zero or negative values
    /// and [`SubscriptionIdError::NotAnInteger`] for values that overflow `i32`.
    pub fn new(value: i64) -> Result<Self, SubscriptionIdError> {
        if value <= 0 {
            return Err(SubscriptionIdError::NotPositive(value));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| SubscriptionIdError::NotAnInteger(value.to_string()))
    }

    /// Returns the raw database value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for SubscriptionId {
    type Err = SubscriptionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| SubscriptionIdError::NotAnInteger(value.to_string()))?;
        Self::new(parsed)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
