//! Integration tests for GET /total-cost.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::Value;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn no_matching_subscriptions_costs_zero(client: TestClient) {
    let response = client
        .total_cost("start_date=2025-01&end_date=2025-12")
        .await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(response.json::<Value>(), serde_json::json!({"total_cost": 0}));
}

#[rstest]
#[tokio::test]
async fn partial_overlap_is_prorated_not_truncated(client: TestClient, kinopoisk_premium: Value) {
    client.create(&kinopoisk_premium).await;

    // 500 * 30 / 61 days
    let total = client
        .total_cost_value("start_date=2025-10&end_date=2025-10")
        .await;

    assert_eq!(total, 246);
}

#[rstest]
#[tokio::test]
async fn fully_covered_subscriptions_count_in_full(
    client: TestClient,
    yandex_plus: Value,
    kinopoisk_premium: Value,
) {
    client.create(&yandex_plus).await;
    client.create(&kinopoisk_premium).await;

    let total = client
        .total_cost_value("start_date=2025-01&end_date=2025-12")
        .await;

    assert_eq!(total, 900);
}

#[rstest]
#[tokio::test]
async fn disjoint_period_costs_zero(client: TestClient, kinopoisk_premium: Value) {
    client.create(&kinopoisk_premium).await;

    let total = client
        .total_cost_value("start_date=2025-12&end_date=2026-03")
        .await;

    assert_eq!(total, 0);
}

#[rstest]
#[tokio::test]
async fn zero_length_subscription_contributes_nothing(client: TestClient) {
    client
        .create(&subscription_body("Okko", 300, USER_ID, "2025-10", "2025-10"))
        .await;

    let total = client
        .total_cost_value("start_date=2025-01&end_date=2025-12")
        .await;

    assert_eq!(total, 0);
}

#[rstest]
#[tokio::test]
async fn user_and_service_filters_narrow_the_total(client: TestClient, kinopoisk_premium: Value) {
    client.create(&kinopoisk_premium).await;
    client
        .create(&subscription_body(
            "Kinopoisk Premium",
            500,
            OTHER_USER_ID,
            "2025-09",
            "2025-11",
        ))
        .await;
    client
        .create(&subscription_body("Yandex Plus", 400, USER_ID, "2025-09", "2025-11"))
        .await;
    let period = "start_date=2025-09&end_date=2025-11";

    let everything = client.total_cost_value(period).await;
    let for_user = client
        .total_cost_value(&format!("{period}&user_id={USER_ID}"))
        .await;
    let for_user_and_service = client
        .total_cost_value(&format!(
            "{period}&user_id={USER_ID}&service_name=Kinopoisk%20Premium"
        ))
        .await;

    assert_eq!(everything, 1400);
    assert_eq!(for_user, 900);
    assert_eq!(for_user_and_service, 500);
}

#[rstest]
#[tokio::test]
async fn empty_filters_are_ignored(client: TestClient, kinopoisk_premium: Value) {
    client.create(&kinopoisk_premium).await;

    let total = client
        .total_cost_value("user_id=&service_name=&start_date=2025-09&end_date=2025-11")
        .await;

    assert_eq!(total, 500);
}

#[rstest]
#[case::missing_start("end_date=2025-10", "start_date is required")]
#[case::missing_end("start_date=2025-10", "end_date is required")]
#[case::malformed_start("start_date=2025/10&end_date=2025-10", "expected YYYY-MM")]
#[case::reversed("start_date=2025-11&end_date=2025-10", "before or equal")]
#[case::malformed_user("start_date=2025-10&end_date=2025-10&user_id=42", "expected a UUID")]
#[tokio::test]
async fn invalid_queries_return_400(
    client: TestClient,
    #[case] query: &str,
    #[case] fragment: &str,
) {
    let response = client.total_cost(query).await;

    assert_bad_request(&response, fragment);
}

#[rstest]
#[tokio::test]
async fn unparseable_query_string_returns_json_error(client: TestClient) {
    let response = client
        .total_cost("start_date=2025-01&start_date=2025-02&end_date=2025-03")
        .await;

    assert_bad_request(&response, "start_date");
}
