//! Infrastructure layer for the subscription service.
//!
//! - `config` - Settings loaded from environment variables
//! - `store` - The `SubscriptionStore` port and its filter
//! - `postgres` - PostgreSQL implementation backed by `sqlx`
//! - `in_memory` - `RwLock`-guarded implementation for tests and local runs
//! - `seed` - Demo data for an empty store
//! - `dependencies` - Dependency injection container

mod config;
mod dependencies;
mod in_memory;
pub mod postgres;
mod seed;
mod store;

pub use config::{AppConfig, ConfigError, StorageMode};
pub use dependencies::AppDependencies;
pub use in_memory::InMemorySubscriptionStore;
pub use postgres::{PostgresPoolConfig, PostgresSubscriptionStore};
pub use seed::seed_if_empty;
pub use store::{StoreError, StoreFuture, SubscriptionFilter, SubscriptionStore};
