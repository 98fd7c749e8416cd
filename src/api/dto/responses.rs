//! Response DTOs for the subscription API.

use serde::{Deserialize, Serialize};

/// A stored subscription as returned to clients.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "service_name": "Yandex Plus",
///     "cost": 400,
///     "user_id": "60601fee-2bf1-4721-ae6f-7636e79a0cba",
///     "start_date": "2025-01",
///     "end_date": "2025-02"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: i32,
    pub service_name: String,
    pub cost: u32,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

/// Result of `GET /total-cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCostResponse {
    pub total_cost: u64,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "unhealthy").
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
