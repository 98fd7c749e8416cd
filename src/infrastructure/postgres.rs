//! PostgreSQL-backed subscription store.
//!
//! # Database Schema
//!
//! Managed by the embedded migrations in `migrations/`:
//!
//! ```sql
//! CREATE TABLE user_subscriptions (
//!     id SERIAL PRIMARY KEY,
//!     service_name VARCHAR(255) NOT NULL,
//!     user_id UUID NOT NULL,
//!     cost INTEGER NOT NULL CHECK (cost >= 0),
//!     start_date DATE NOT NULL,
//!     end_date DATE NOT NULL
//! );
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use futures::FutureExt;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::store::{StoreError, StoreFuture, SubscriptionFilter, SubscriptionStore};
use crate::domain::{
    Cost, MonthDate, ServiceName, Subscription, SubscriptionDraft, SubscriptionId, UserId,
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_COLUMNS: &str = "SELECT id, service_name, user_id, cost, start_date, end_date \
                              FROM user_subscriptions";

const RETURNING_COLUMNS: &str = "RETURNING id, service_name, user_id, cost, start_date, end_date";

// =============================================================================
// Pool
// =============================================================================

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresPoolConfig {
    /// `postgres://[user[:password]@]host[:port]/database[?options]`
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl PostgresPoolConfig {
    /// Settings for `url` with a pool of 10 connections and a 30 second
    /// acquire timeout.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Opens a connection pool.
///
/// # Errors
///
/// Returns [`StoreError::Database`] if the database is unreachable.
pub async fn connect(config: &PostgresPoolConfig) -> Result<PgPool, StoreError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
        .map_err(|error| {
            StoreError::Database(format!("failed to create PostgreSQL connection pool: {error}"))
        })
}

/// Applies the embedded schema migrations.
///
/// # Errors
///
/// Returns [`StoreError::Migration`] if any migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|error| StoreError::Migration(error.to_string()))
}

// =============================================================================
// Row mapping
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: i32,
    service_name: String,
    user_id: Uuid,
    cost: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = StoreError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let corrupt = |error: &dyn std::fmt::Display| {
            StoreError::CorruptRecord(format!("subscription {}: {error}", row.id))
        };
        Ok(Self {
            id: SubscriptionId::new(i64::from(row.id)).map_err(|error| corrupt(&error))?,
            service_name: ServiceName::new(&row.service_name).map_err(|error| corrupt(&error))?,
            user_id: UserId::from(row.user_id),
            cost: Cost::new(i64::from(row.cost)).map_err(|error| corrupt(&error))?,
            start_date: MonthDate::truncate(row.start_date),
            end_date: MonthDate::truncate(row.end_date),
        })
    }
}

fn rows_to_subscriptions(rows: Vec<SubscriptionRow>) -> Result<Vec<Subscription>, StoreError> {
    rows.into_iter().map(Subscription::try_from).collect()
}

// =============================================================================
// PostgresSubscriptionStore
// =============================================================================

/// [`SubscriptionStore`] over the `user_subscriptions` table.
#[derive(Debug, Clone)]
pub struct PostgresSubscriptionStore {
    pool: PgPool,
}

impl PostgresSubscriptionStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubscriptionStore for PostgresSubscriptionStore {
    fn insert(&self, draft: SubscriptionDraft) -> StoreFuture<Subscription> {
        let pool = self.pool.clone();
        async move {
            let row: SubscriptionRow = sqlx::query_as(&format!(
                "INSERT INTO user_subscriptions (service_name, user_id, cost, start_date, end_date) \
                 VALUES ($1, $2, $3, $4, $5) {RETURNING_COLUMNS}"
            ))
            .bind(draft.service_name().as_str())
            .bind(*draft.user_id().as_uuid())
            .bind(draft.cost().to_database())
            .bind(draft.start_date().first_day())
            .bind(draft.end_date().first_day())
            .fetch_one(&pool)
            .await?;

            Subscription::try_from(row)
        }
        .boxed()
    }

    fn insert_with_id(
        &self,
        id: SubscriptionId,
        draft: SubscriptionDraft,
    ) -> StoreFuture<Subscription> {
        let pool = self.pool.clone();
        async move {
            let mut transaction = pool.begin().await?;

            let row: SubscriptionRow = sqlx::query_as(&format!(
                "INSERT INTO user_subscriptions (id, service_name, user_id, cost, start_date, end_date) \
                 VALUES ($1, $2, $3, $4, $5, $6) {RETURNING_COLUMNS}"
            ))
            .bind(id.value())
            .bind(draft.service_name().as_str())
            .bind(*draft.user_id().as_uuid())
            .bind(draft.cost().to_database())
            .bind(draft.start_date().first_day())
            .bind(draft.end_date().first_day())
            .fetch_one(&mut *transaction)
            .await?;

            // Explicit ids bypass the serial sequence; move it past them.
            sqlx::query(
                "SELECT setval(pg_get_serial_sequence('user_subscriptions', 'id'), \
                 (SELECT MAX(id) FROM user_subscriptions))",
            )
            .execute(&mut *transaction)
            .await?;

            transaction.commit().await?;

            Subscription::try_from(row)
        }
        .boxed()
    }

    fn find_by_id(&self, id: SubscriptionId) -> StoreFuture<Option<Subscription>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<SubscriptionRow> =
                sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                    .bind(id.value())
                    .fetch_optional(&pool)
                    .await?;

            row.map(Subscription::try_from).transpose()
        }
        .boxed()
    }

    fn find_all(&self) -> StoreFuture<Vec<Subscription>> {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<SubscriptionRow> =
                sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
                    .fetch_all(&pool)
                    .await?;

            rows_to_subscriptions(rows)
        }
        .boxed()
    }

    fn find_by_filters(&self, filter: SubscriptionFilter) -> StoreFuture<Vec<Subscription>> {
        let pool = self.pool.clone();
        async move {
            let mut builder = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
            builder
                .push(" WHERE start_date <= ")
                .push_bind(filter.period.end())
                .push(" AND end_date >= ")
                .push_bind(filter.period.start());
            if let Some(user_id) = filter.user_id {
                builder.push(" AND user_id = ").push_bind(*user_id.as_uuid());
            }
            if let Some(service_name) = filter.service_name {
                builder
                    .push(" AND service_name = ")
                    .push_bind(service_name.as_str().to_string());
            }
            builder.push(" ORDER BY id ASC");

            let rows = builder
                .build_query_as::<SubscriptionRow>()
                .fetch_all(&pool)
                .await?;

            rows_to_subscriptions(rows)
        }
        .boxed()
    }

    fn update(
        &self,
        id: SubscriptionId,
        draft: SubscriptionDraft,
    ) -> StoreFuture<Option<Subscription>> {
        let pool = self.pool.clone();
        async move {
            let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
                "UPDATE user_subscriptions \
                 SET service_name = $1, user_id = $2, cost = $3, start_date = $4, end_date = $5 \
                 WHERE id = $6 {RETURNING_COLUMNS}"
            ))
            .bind(draft.service_name().as_str())
            .bind(*draft.user_id().as_uuid())
            .bind(draft.cost().to_database())
            .bind(draft.start_date().first_day())
            .bind(draft.end_date().first_day())
            .bind(id.value())
            .fetch_optional(&pool)
            .await?;

            row.map(Subscription::try_from).transpose()
        }
        .boxed()
    }

    fn delete(&self, id: SubscriptionId) -> StoreFuture<bool> {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query("DELETE FROM user_subscriptions WHERE id = $1")
                .bind(id.value())
                .execute(&pool)
                .await?;

            Ok(result.rows_affected() > 0)
        }
        .boxed()
    }

    fn count(&self) -> StoreFuture<u64> {
        let pool = self.pool.clone();
        async move {
            let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_subscriptions")
                .fetch_one(&pool)
                .await?;

            u64::try_from(count)
                .map_err(|_| StoreError::Database(format!("negative row count: {count}")))
        }
        .boxed()
    }
}
