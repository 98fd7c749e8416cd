//! Test fixtures.

use std::sync::Arc;

use rstest::fixture;
use serde_json::{Value, json};

use subscription_aggregator::api::create_router;
use subscription_aggregator::infrastructure::{
    AppConfig, AppDependencies, InMemorySubscriptionStore,
};

use super::http_client::TestClient;

pub const USER_ID: &str = "60601fee-2bf1-4721-ae6f-7636e79a0cba";
pub const OTHER_USER_ID: &str = "0b7e9a4c-3f7e-4e52-9d0a-2f6f1e4b8c11";

/// Client over a router backed by a fresh in-memory store.
#[fixture]
pub fn client() -> TestClient {
    let dependencies = AppDependencies::new(
        AppConfig::in_memory(),
        Arc::new(InMemorySubscriptionStore::new()),
    );
    TestClient::new(create_router(dependencies))
}

pub fn subscription_body(
    service_name: &str,
    cost: i64,
    user_id: &str,
    start_date: &str,
    end_date: &str,
) -> Value {
    json!({
        "service_name": service_name,
        "cost": cost,
        "user_id": user_id,
        "start_date": start_date,
        "end_date": end_date,
    })
}

/// Yandex Plus, 400, 2025-01..2025-02.
#[fixture]
pub fn yandex_plus() -> Value {
    subscription_body("Yandex Plus", 400, USER_ID, "2025-01", "2025-02")
}

/// Kinopoisk Premium, 500, 2025-09..2025-11.
#[fixture]
pub fn kinopoisk_premium() -> Value {
    subscription_body("Kinopoisk Premium", 500, USER_ID, "2025-09", "2025-11")
}
