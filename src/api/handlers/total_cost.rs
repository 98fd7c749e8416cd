//! Total-cost handler.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::api::dto::{TotalCostQuery, TotalCostResponse, query_to_filter};
use crate::api::middleware::ApiError;
use crate::application::calculate_total_cost;
use crate::infrastructure::AppDependencies;

/// GET /total-cost - Prorated cost of the matching subscriptions over
/// `start_date..=end_date` (whole months).
///
/// # Query Parameters
///
/// - `start_date`, `end_date` - `YYYY-MM`, required
/// - `user_id`, `service_name` - optional; empty means no filter
///
/// # Errors
///
/// - `400 Bad Request` - Unparseable query string, missing or malformed
///   parameters, or a reversed range
/// - `500 Internal Server Error` - The store failed
pub async fn get_total_cost(
    State(dependencies): State<AppDependencies>,
    query: Result<Query<TotalCostQuery>, QueryRejection>,
) -> Result<Json<TotalCostResponse>, ApiError> {
    let Query(query) = query?;
    let filter = query_to_filter(&query)?;
    let total_cost = calculate_total_cost(dependencies.store().as_ref(), filter).await?;

    Ok(Json(TotalCostResponse { total_cost }))
}
