//! Subscription cost value object.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Validation errors for [`Cost`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    #[error("cost must be non-negative, got {0}")]
    Negative(i64),
    #[error("cost must not exceed {max}, got {0}", max = Cost::MAX)]
    TooLarge(i64),
}

/// Total price of a subscription over its whole duration, in whole currency
/// units.
///
/// Bounded by the `INTEGER` storage column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(u32);

impl Cost {
    /// Largest representable cost.
    #[allow(clippy::cast_sign_loss)]
    pub const MAX: u32 = i32::MAX as u32;

    pub const ZERO: Self = Self(0);

    /// Creates a cost from a signed amount.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if the value is negative or exceeds [`Cost::MAX`].
    pub fn new(value: i64) -> Result<Self, CostError> {
        if value < 0 {
            return Err(CostError::Negative(value));
        }
        u32::try_from(value)
            .ok()
            .filter(|amount| *amount <= Self::MAX)
            .map(Self)
            .ok_or(CostError::TooLarge(value))
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Value as stored in the `INTEGER` column.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_database(self) -> i32 {
        // Bounded by MAX, so the cast never wraps.
        self.0 as i32
    }

    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
