//! Dependency injection container for the subscription service.
//!
//! `AppDependencies` is the axum router state: the loaded configuration plus
//! the store selected at startup. Tests build it around
//! [`InMemorySubscriptionStore`](super::InMemorySubscriptionStore).

use std::fmt;
use std::sync::Arc;

use super::config::AppConfig;
use super::store::SubscriptionStore;

/// Application dependency container.
///
/// Cloning is cheap: the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    store: Arc<dyn SubscriptionStore>,
}

impl AppDependencies {
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn SubscriptionStore>) -> Self {
        Self { config, store }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> Arc<dyn SubscriptionStore> {
        Arc::clone(&self.store)
    }
}

impl fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("store", &"<dyn SubscriptionStore>")
            .finish()
    }
}
