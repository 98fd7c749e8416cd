//! Total-cost query.

use tracing::debug;

use crate::domain::total_cost;
use crate::infrastructure::{StoreError, SubscriptionFilter, SubscriptionStore};

/// Fetches the subscriptions selected by `filter` and prorates their cost
/// over the filter's period.
///
/// # Errors
///
/// Returns the [`StoreError`] raised while fetching candidates.
pub async fn calculate_total_cost(
    store: &dyn SubscriptionStore,
    filter: SubscriptionFilter,
) -> Result<u64, StoreError> {
    let period = filter.period;
    let candidates = store.find_by_filters(filter).await?;
    let total = total_cost(&period, &candidates);

    debug!(
        period_start = %period.start(),
        period_end = %period.end(),
        candidates = candidates.len(),
        total,
        "Calculated total cost"
    );

    Ok(total)
}
