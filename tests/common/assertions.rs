//! Custom assertion helpers for integration tests.

use axum::http::StatusCode;

use super::http_client::TestResponse;

pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {expected}, got {}: {}",
        response.status,
        String::from_utf8_lossy(&response.body)
    );
}

/// Asserts a 400 whose `{"error": ...}` message contains `fragment`.
pub fn assert_bad_request(response: &TestResponse, fragment: &str) {
    assert_status(response, StatusCode::BAD_REQUEST);
    let message = response.error_message();
    assert!(
        message.contains(fragment),
        "Expected error containing '{fragment}', got '{message}'"
    );
}
