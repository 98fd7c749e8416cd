//! Subscription store abstraction.
//!
//! Every operation returns a boxed `'static` future, so implementations clone
//! whatever handle they need (pool, shared map) into the future and the trait
//! stays object-safe behind `Arc<dyn SubscriptionStore>`.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{Period, ServiceName, Subscription, SubscriptionDraft, SubscriptionId, UserId};

/// Errors raised by store implementations.
///
/// All of them are surfaced to clients as internal errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The datastore rejected or failed an operation.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored row does not satisfy the domain invariants.
    #[error("Corrupt subscription record: {0}")]
    CorruptRecord(String),

    /// Applying schema migrations failed.
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error.to_string())
    }
}

/// Future returned by every store operation.
pub type StoreFuture<T> = BoxFuture<'static, Result<T, StoreError>>;

/// Selection used by the total-cost query.
///
/// Matches subscriptions with `start_date <= period.end AND end_date >=
/// period.start`, narrowed by the optional user and service filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub user_id: Option<UserId>,
    pub service_name: Option<ServiceName>,
    pub period: Period,
}

impl SubscriptionFilter {
    /// Filter on the period alone.
    #[must_use]
    pub const fn for_period(period: Period) -> Self {
        Self {
            user_id: None,
            service_name: None,
            period,
        }
    }

    #[must_use]
    pub const fn with_user_id(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = user_id;
        self
    }

    #[must_use]
    pub fn with_service_name(mut self, service_name: Option<ServiceName>) -> Self {
        self.service_name = service_name;
        self
    }

    /// Whether a subscription is selected by this filter.
    #[must_use]
    pub fn matches(&self, subscription: &Subscription) -> bool {
        subscription.start_date.first_day() <= self.period.end()
            && subscription.end_date.first_day() >= self.period.start()
            && self
                .user_id
                .is_none_or(|user_id| user_id == subscription.user_id)
            && self
                .service_name
                .as_ref()
                .is_none_or(|service_name| *service_name == subscription.service_name)
    }
}

/// Persistence port for subscriptions.
pub trait SubscriptionStore: Send + Sync {
    /// Stores a new subscription and returns it with its assigned id.
    fn insert(&self, draft: SubscriptionDraft) -> StoreFuture<Subscription>;

    /// Stores a new subscription under a caller-chosen id.
    fn insert_with_id(&self, id: SubscriptionId, draft: SubscriptionDraft)
    -> StoreFuture<Subscription>;

    /// Looks a subscription up by id.
    fn find_by_id(&self, id: SubscriptionId) -> StoreFuture<Option<Subscription>>;

    /// Lists every subscription, ordered by id.
    fn find_all(&self) -> StoreFuture<Vec<Subscription>>;

    /// Lists subscriptions selected by `filter`, ordered by id.
    fn find_by_filters(&self, filter: SubscriptionFilter) -> StoreFuture<Vec<Subscription>>;

    /// Replaces every field of an existing subscription.
    ///
    /// Resolves to `None` when no subscription has this id.
    fn update(
        &self,
        id: SubscriptionId,
        draft: SubscriptionDraft,
    ) -> StoreFuture<Option<Subscription>>;

    /// Removes a subscription; resolves to whether a record was removed.
    fn delete(&self, id: SubscriptionId) -> StoreFuture<bool>;

    /// Number of stored subscriptions.
    fn count(&self) -> StoreFuture<u64>;
}
