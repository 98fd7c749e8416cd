//! In-process HTTP client for integration tests.
//!
//! Requests go straight through the router with `tower::ServiceExt::oneshot`;
//! no socket is opened.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use subscription_aggregator::api::dto::{
    ErrorResponse, HealthResponse, SubscriptionResponse, TotalCostResponse,
};

#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|error| {
            panic!(
                "Failed to decode body ({error}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn subscription(&self) -> SubscriptionResponse {
        self.json()
    }

    pub fn error_message(&self) -> String {
        self.json::<ErrorResponse>().error
    }
}

impl TestClient {
    pub const fn new(router: Router) -> Self {
        Self { router }
    }

    // Health check
    pub async fn health(&self) -> HealthResponse {
        self.get("/health").await.json()
    }

    // Subscription operations
    pub async fn list(&self) -> Vec<SubscriptionResponse> {
        self.get("/subscriptions").await.json()
    }

    pub async fn get_subscription(&self, id: &str) -> TestResponse {
        self.get(&format!("/subscribe/{id}")).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> TestResponse {
        self.send_json("POST", "/subscribe", body).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, body: &B) -> TestResponse {
        self.send_json("PUT", &format!("/subscribe/{id}"), body).await
    }

    pub async fn delete(&self, id: &str) -> TestResponse {
        self.send("DELETE", &format!("/subscribe/{id}"), Body::empty())
            .await
    }

    pub async fn total_cost(&self, query: &str) -> TestResponse {
        self.get(&format!("/total-cost?{query}")).await
    }

    pub async fn total_cost_value(&self, query: &str) -> u64 {
        let response = self.total_cost(query).await;
        assert_eq!(response.status, StatusCode::OK, "{response:?}");
        response.json::<TotalCostResponse>().total_cost
    }

    // Internal helpers
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send("GET", path, Body::empty()).await
    }

    pub async fn send_raw(&self, method: &str, path: &str, body: &'static str) -> TestResponse {
        self.send(method, path, Body::from(body)).await
    }

    async fn send_json<B: Serialize>(&self, method: &str, path: &str, body: &B) -> TestResponse {
        let payload = serde_json::to_vec(body).unwrap();
        self.send(method, path, Body::from(payload)).await
    }

    async fn send(&self, method: &str, path: &str, body: Body) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse { status, body }
    }
}
