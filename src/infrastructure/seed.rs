//! Demo data inserted into an empty store at startup.

use tracing::info;

use super::store::{StoreError, SubscriptionStore};
use crate::domain::{Cost, MonthDate, ServiceName, SubscriptionDraft, SubscriptionError, UserId};

/// `(service_name, cost, start_month, end_month)`
const DEMO_SUBSCRIPTIONS: [(&str, i64, &str, &str); 2] = [
    ("Yandex Plus", 400, "2025-01", "2025-02"),
    ("Kinopoisk Premium", 500, "2025-09", "2025-11"),
];

fn demo_drafts() -> Result<Vec<SubscriptionDraft>, SubscriptionError> {
    DEMO_SUBSCRIPTIONS
        .iter()
        .map(|(service_name, cost, start, end)| {
            SubscriptionDraft::new(
                ServiceName::new(service_name)?,
                UserId::generate(),
                Cost::new(*cost)?,
                MonthDate::parse(start)
                    .map_err(|source| SubscriptionError::invalid_date("start_date", source))?,
                MonthDate::parse(end)
                    .map_err(|source| SubscriptionError::invalid_date("end_date", source))?,
            )
        })
        .collect()
}

/// Inserts the demo subscriptions if the store holds none.
///
/// Returns how many records were inserted.
///
/// # Errors
///
/// Returns the first [`StoreError`] raised by the store.
pub async fn seed_if_empty(store: &dyn SubscriptionStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let drafts = demo_drafts().map_err(|error| StoreError::CorruptRecord(error.to_string()))?;
    let inserted = drafts.len();
    for draft in drafts {
        let subscription = store.insert(draft).await?;
        info!(
            id = %subscription.id,
            service_name = %subscription.service_name,
            "Seeded demo subscription"
        );
    }

    Ok(inserted)
}
