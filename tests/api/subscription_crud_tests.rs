//! Integration tests for the subscription CRUD endpoints.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::Value;

use crate::common::*;

// =============================================================================
// POST /subscribe + GET /subscribe/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn created_subscription_round_trips_as_months(client: TestClient, yandex_plus: Value) {
    let created = client.create(&yandex_plus).await;
    assert_status(&created, StatusCode::CREATED);
    let created = created.subscription();

    let fetched = client.get_subscription(&created.id.to_string()).await;

    assert_status(&fetched, StatusCode::OK);
    let fetched = fetched.subscription();
    assert_eq!(fetched, created);
    assert_eq!(fetched.service_name, "Yandex Plus");
    assert_eq!(fetched.cost, 400);
    assert_eq!(fetched.user_id, USER_ID);
    assert_eq!(fetched.start_date, "2025-01");
    assert_eq!(fetched.end_date, "2025-02");
}

#[rstest]
#[tokio::test]
async fn create_assigns_increasing_ids(
    client: TestClient,
    yandex_plus: Value,
    kinopoisk_premium: Value,
) {
    let first = client.create(&yandex_plus).await.subscription();
    let second = client.create(&kinopoisk_premium).await.subscription();

    assert!(second.id > first.id);
}

#[rstest]
#[case::missing_user_id("user_id", Value::Null, "user_id is required")]
#[case::malformed_user_id("user_id", Value::from("not-a-uuid"), "expected a UUID")]
#[case::empty_service_name("service_name", Value::from(""), "service_name is required")]
#[case::negative_cost("cost", Value::from(-100), "non-negative")]
#[case::missing_cost("cost", Value::Null, "cost is required")]
#[case::malformed_start("start_date", Value::from("2025-1"), "expected YYYY-MM")]
#[case::invalid_month("end_date", Value::from("2025-13"), "between 01 and 12")]
#[case::reversed_range("start_date", Value::from("2025-03"), "before or equal")]
#[tokio::test]
async fn create_rejects_invalid_fields(
    client: TestClient,
    yandex_plus: Value,
    #[case] field: &str,
    #[case] value: Value,
    #[case] fragment: &str,
) {
    let mut body = yandex_plus;
    body[field] = value;

    let response = client.create(&body).await;

    assert_bad_request(&response, fragment);
    assert!(client.list().await.is_empty());
}

#[rstest]
#[case::malformed_json(r#"{"service_name": "Yandex Plus""#)]
#[case::wrong_type(r#"{"cost": "four hundred"}"#)]
#[tokio::test]
async fn create_rejects_unparseable_bodies(client: TestClient, #[case] body: &'static str) {
    let response = client.send_raw("POST", "/subscribe", body).await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert!(!response.error_message().is_empty());
}

// =============================================================================
// GET /subscribe/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn get_missing_subscription_returns_404(client: TestClient) {
    let response = client.get_subscription("42").await;

    assert_status(&response, StatusCode::NOT_FOUND);
    assert!(response.error_message().contains("42"));
}

#[rstest]
#[case("abc")]
#[case("0")]
#[case("-1")]
#[tokio::test]
async fn get_with_malformed_id_returns_400(client: TestClient, #[case] id: &str) {
    let response = client.get_subscription(id).await;

    assert_bad_request(&response, "expected a positive integer");
}

// =============================================================================
// GET /subscriptions
// =============================================================================

#[rstest]
#[tokio::test]
async fn list_returns_all_subscriptions_in_id_order(
    client: TestClient,
    yandex_plus: Value,
    kinopoisk_premium: Value,
) {
    assert!(client.list().await.is_empty());

    client.create(&kinopoisk_premium).await;
    client.create(&yandex_plus).await;

    let listed = client.list().await;
    let names: Vec<&str> = listed.iter().map(|s| s.service_name.as_str()).collect();
    assert_eq!(names, ["Kinopoisk Premium", "Yandex Plus"]);
    assert!(listed[0].id < listed[1].id);
}

// =============================================================================
// PUT /subscribe/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn update_existing_subscription_returns_200(
    client: TestClient,
    yandex_plus: Value,
    kinopoisk_premium: Value,
) {
    let created = client.create(&yandex_plus).await.subscription();
    let id = created.id.to_string();

    let response = client.update(&id, &kinopoisk_premium).await;

    assert_status(&response, StatusCode::OK);
    let updated = response.subscription();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.service_name, "Kinopoisk Premium");
    assert_eq!(updated.cost, 500);
    assert_eq!(updated.start_date, "2025-09");
    assert_eq!(updated.end_date, "2025-11");
    assert_eq!(client.get_subscription(&id).await.subscription(), updated);
    assert_eq!(client.list().await.len(), 1);
}

#[rstest]
#[tokio::test]
async fn update_missing_subscription_creates_it_with_that_id(
    client: TestClient,
    yandex_plus: Value,
    kinopoisk_premium: Value,
) {
    let response = client.update("77", &yandex_plus).await;

    assert_status(&response, StatusCode::CREATED);
    let created = response.subscription();
    assert_eq!(created.id, 77);
    assert_eq!(client.get_subscription("77").await.subscription(), created);

    let next = client.create(&kinopoisk_premium).await.subscription();
    assert!(next.id > 77);
}

#[rstest]
#[tokio::test]
async fn update_validates_before_touching_the_store(client: TestClient, yandex_plus: Value) {
    let created = client.create(&yandex_plus).await.subscription();
    let mut body = yandex_plus;
    body["end_date"] = Value::from("2024-12");

    let response = client.update(&created.id.to_string(), &body).await;

    assert_bad_request(&response, "before or equal");
    assert_eq!(
        client
            .get_subscription(&created.id.to_string())
            .await
            .subscription(),
        created
    );
}

#[rstest]
#[tokio::test]
async fn update_with_malformed_id_returns_400(client: TestClient, yandex_plus: Value) {
    let response = client.update("one", &yandex_plus).await;

    assert_bad_request(&response, "expected a positive integer");
}

// =============================================================================
// DELETE /subscribe/{id}
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_removes_the_subscription(client: TestClient, yandex_plus: Value) {
    let created = client.create(&yandex_plus).await.subscription();
    let id = created.id.to_string();

    let response = client.delete(&id).await;

    assert_status(&response, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
    assert_status(&client.get_subscription(&id).await, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn delete_of_missing_subscription_returns_204(client: TestClient) {
    let response = client.delete("5").await;

    assert_status(&response, StatusCode::NO_CONTENT);
}

#[rstest]
#[tokio::test]
async fn delete_with_malformed_id_returns_400(client: TestClient) {
    let response = client.delete("1.5").await;

    assert_bad_request(&response, "expected a positive integer");
}
