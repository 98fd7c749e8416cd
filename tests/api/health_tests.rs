//! Integration tests for GET /health.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_returns_status_and_version(client: TestClient) {
    let response = client.health().await;

    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
}
