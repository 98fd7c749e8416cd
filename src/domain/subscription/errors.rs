//! Domain errors for subscriptions.

use thiserror::Error;

use crate::domain::value_objects::{
    CostError, MonthDate, MonthDateError, ServiceNameError, SubscriptionIdError, UserIdError,
};

/// Reasons a subscription (or a query period) fails validation.
///
/// Every variant is an input problem; none of them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error(transparent)]
    InvalidId(#[from] SubscriptionIdError),

    #[error(transparent)]
    InvalidUserId(#[from] UserIdError),

    #[error(transparent)]
    InvalidServiceName(#[from] ServiceNameError),

    #[error(transparent)]
    InvalidCost(#[from] CostError),

    /// A date field is not a valid `YYYY-MM` month.
    #[error("invalid {field}: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: MonthDateError,
    },

    /// A required field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// `start_date` is later than `end_date`.
    #[error("start_date {start} must be before or equal to end_date {end}")]
    StartAfterEnd { start: MonthDate, end: MonthDate },
}

impl SubscriptionError {
    /// Tags a month parsing failure with the field it came from.
    #[must_use]
    pub const fn invalid_date(field: &'static str, source: MonthDateError) -> Self {
        Self::InvalidDate { field, source }
    }
}
