//! Subscription entity and its validated draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::SubscriptionError;
use crate::domain::value_objects::{Cost, MonthDate, ServiceName, SubscriptionId, UserId};

/// A persisted subscription.
///
/// `start_date <= end_date` is guaranteed for records created through
/// [`SubscriptionDraft`]; code reading subscriptions (notably the proration
/// engine) must still tolerate records that violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub service_name: ServiceName,
    pub user_id: UserId,
    pub cost: Cost,
    pub start_date: MonthDate,
    pub end_date: MonthDate,
}

impl Subscription {
    /// Duration of the subscription in days (`end_date - start_date`).
    ///
    /// Zero or negative for subscriptions that cannot be prorated.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        days_between(self.start_date.first_day(), self.end_date.first_day())
    }
}

/// Validated content of a subscription that has no id yet.
///
/// Used for both creation and wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDraft {
    service_name: ServiceName,
    user_id: UserId,
    cost: Cost,
    start_date: MonthDate,
    end_date: MonthDate,
}

impl SubscriptionDraft {
    /// Creates a draft, enforcing `start_date <= end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::StartAfterEnd`] when the range is reversed.
    pub fn new(
        service_name: ServiceName,
        user_id: UserId,
        cost: Cost,
        start_date: MonthDate,
        end_date: MonthDate,
    ) -> Result<Self, SubscriptionError> {
        if start_date > end_date {
            return Err(SubscriptionError::StartAfterEnd {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            service_name,
            user_id,
            cost,
            start_date,
            end_date,
        })
    }

    #[must_use]
    pub const fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    #[must_use]
    pub const fn start_date(&self) -> MonthDate {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> MonthDate {
        self.end_date
    }

    /// Attaches an id, producing the persisted shape.
    #[must_use]
    pub fn into_subscription(self, id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            service_name: self.service_name,
            user_id: self.user_id,
            cost: self.cost,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Signed number of days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
