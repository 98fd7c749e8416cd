//! Request DTOs for the subscription API.
//!
//! Every field is optional at the wire level so that a missing field is
//! reported by name during transformation instead of as a generic JSON error.

use serde::Deserialize;

/// Body of `POST /subscribe` and `PUT /subscribe/{id}`.
///
/// # Example JSON
///
/// ```json
/// {
///     "user_id": "60601fee-2bf1-4721-ae6f-7636e79a0cba",
///     "service_name": "Yandex Plus",
///     "cost": 400,
///     "start_date": "2025-01",
///     "end_date": "2025-02"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubscriptionRequest {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
    pub cost: Option<i64>,
    /// `YYYY-MM`
    pub start_date: Option<String>,
    /// `YYYY-MM`
    pub end_date: Option<String>,
}

/// Query string of `GET /total-cost`.
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TotalCostQuery {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
