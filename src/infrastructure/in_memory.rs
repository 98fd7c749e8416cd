//! In-memory subscription store.
//!
//! Backs `STORAGE_MODE=in_memory` and the HTTP tests. Records live in a
//! `BTreeMap` keyed by id behind `Arc<RwLock<...>>`, so iteration is already
//! ordered by id.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::RwLock;

use super::store::{StoreError, StoreFuture, SubscriptionFilter, SubscriptionStore};
use crate::domain::{Subscription, SubscriptionDraft, SubscriptionId};

#[derive(Debug, Default)]
struct State {
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
    /// Last id handed out by `insert`; kept at or above every stored id.
    last_id: i32,
}

impl State {
    fn next_id(&mut self) -> Result<SubscriptionId, StoreError> {
        let next = i64::from(self.last_id) + 1;
        let id = SubscriptionId::new(next)
            .map_err(|error| StoreError::Database(format!("id sequence exhausted: {error}")))?;
        self.last_id = id.value();
        Ok(id)
    }
}

/// Thread-safe in-memory implementation of [`SubscriptionStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionStore {
    state: Arc<RwLock<State>>,
}

impl InMemorySubscriptionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[allow(clippy::significant_drop_tightening)]
impl SubscriptionStore for InMemorySubscriptionStore {
    fn insert(&self, draft: SubscriptionDraft) -> StoreFuture<Subscription> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            let id = guard.next_id()?;
            let subscription = draft.into_subscription(id);
            guard.subscriptions.insert(id, subscription.clone());
            Ok(subscription)
        }
        .boxed()
    }

    fn insert_with_id(
        &self,
        id: SubscriptionId,
        draft: SubscriptionDraft,
    ) -> StoreFuture<Subscription> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            if guard.subscriptions.contains_key(&id) {
                return Err(StoreError::Database(format!(
                    "duplicate key: subscription {id} already exists"
                )));
            }
            let subscription = draft.into_subscription(id);
            guard.subscriptions.insert(id, subscription.clone());
            guard.last_id = guard.last_id.max(id.value());
            Ok(subscription)
        }
        .boxed()
    }

    fn find_by_id(&self, id: SubscriptionId) -> StoreFuture<Option<Subscription>> {
        let state = Arc::clone(&self.state);
        async move { Ok(state.read().await.subscriptions.get(&id).cloned()) }.boxed()
    }

    fn find_all(&self) -> StoreFuture<Vec<Subscription>> {
        let state = Arc::clone(&self.state);
        async move { Ok(state.read().await.subscriptions.values().cloned().collect()) }.boxed()
    }

    fn find_by_filters(&self, filter: SubscriptionFilter) -> StoreFuture<Vec<Subscription>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard
                .subscriptions
                .values()
                .filter(|subscription| filter.matches(subscription))
                .cloned()
                .collect())
        }
        .boxed()
    }

    fn update(
        &self,
        id: SubscriptionId,
        draft: SubscriptionDraft,
    ) -> StoreFuture<Option<Subscription>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            Ok(guard.subscriptions.get_mut(&id).map(|stored| {
                *stored = draft.into_subscription(id);
                stored.clone()
            }))
        }
        .boxed()
    }

    fn delete(&self, id: SubscriptionId) -> StoreFuture<bool> {
        let state = Arc::clone(&self.state);
        async move { Ok(state.write().await.subscriptions.remove(&id).is_some()) }.boxed()
    }

    fn count(&self) -> StoreFuture<u64> {
        let state = Arc::clone(&self.state);
        async move { Ok(state.read().await.subscriptions.len() as u64) }.boxed()
    }
}
