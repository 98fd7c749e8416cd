//! Cost proration over a query period.
//!
//! A subscription's cost covers its whole lifetime. The part attributable to
//! a query period is the cost scaled by the fraction of the lifetime (in days)
//! that overlaps the period:
//!
//! ```text
//! overlap  = [max(period.start, sub.start), min(period.end, sub.end)]
//! share    = cost * overlap_days / total_days
//! ```
//!
//! The product is formed before the division, in exact decimal arithmetic,
//! so a partial overlap never collapses to zero.
//!
//! # Rounding
//!
//! Each subscription's share is rounded to the nearest whole cost unit
//! (midpoints away from zero) before it is summed. The total is therefore
//! exactly the sum of the per-subscription results.
//!
//! Subscriptions that do not overlap the period, or whose duration is not
//! strictly positive, contribute nothing. The engine has no error cases.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::subscription::{Subscription, SubscriptionError, days_between};
use super::value_objects::MonthDate;

/// Inclusive date range a total cost is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Creates a period, enforcing `start <= end`.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::StartAfterEnd`] for a reversed range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SubscriptionError> {
        if start > end {
            return Err(SubscriptionError::StartAfterEnd {
                start: MonthDate::truncate(start),
                end: MonthDate::truncate(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Period covering whole months: from the first day of `start` to the
    /// last day of `end`.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriptionError::StartAfterEnd`] when `start` is after `end`.
    pub fn from_months(start: MonthDate, end: MonthDate) -> Result<Self, SubscriptionError> {
        if start > end {
            return Err(SubscriptionError::StartAfterEnd { start, end });
        }
        Ok(Self {
            start: start.first_day(),
            end: end.last_day(),
        })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Intersection with `[from, to]`, or `None` when they are disjoint.
    #[must_use]
    pub fn overlap(&self, from: NaiveDate, to: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let overlap_start = self.start.max(from);
        let overlap_end = self.end.min(to);
        (overlap_start <= overlap_end).then_some((overlap_start, overlap_end))
    }
}

/// Total cost of `subscriptions` attributable to `period`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use subscription_aggregator::domain::proration::{Period, total_cost};
///
/// let period = Period::new(
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(total_cost(&period, &[]), 0);
/// ```
#[must_use]
pub fn total_cost(period: &Period, subscriptions: &[Subscription]) -> u64 {
    subscriptions
        .iter()
        .map(|subscription| prorated_cost(period, subscription))
        .sum()
}

/// Share of a single subscription's cost that falls inside `period`.
#[must_use]
pub fn prorated_cost(period: &Period, subscription: &Subscription) -> u64 {
    let subscription_start = subscription.start_date.first_day();
    let subscription_end = subscription.end_date.first_day();

    let Some((overlap_start, overlap_end)) = period.overlap(subscription_start, subscription_end)
    else {
        return 0;
    };

    let total_days = days_between(subscription_start, subscription_end);
    if total_days <= 0 {
        return 0;
    }
    let overlap_days = days_between(overlap_start, overlap_end);

    let share = subscription.cost.to_decimal() * Decimal::from(overlap_days)
        / Decimal::from(total_days);

    // overlap_days <= total_days, so the share never exceeds the cost.
    share
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
