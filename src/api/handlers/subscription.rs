//! Subscription CRUD handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | /subscriptions | 200 + list |
//! | GET | /subscribe/{id} | 200 + record |
//! | POST | /subscribe | 201 + created record |
//! | PUT | /subscribe/{id} | 200 + updated record, or 201 when created |
//! | DELETE | /subscribe/{id} | 204 |

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::api::dto::{
    SubscriptionRequest, SubscriptionResponse, parse_subscription_id, request_to_draft,
    subscription_to_response,
};
use crate::api::middleware::ApiError;
use crate::infrastructure::AppDependencies;

/// GET /subscriptions - Lists every subscription ordered by id.
///
/// # Errors
///
/// - `500 Internal Server Error` - The store failed
pub async fn list_subscriptions(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<SubscriptionResponse>>, ApiError> {
    let subscriptions = dependencies.store().find_all().await?;
    debug!(count = subscriptions.len(), "Listed subscriptions");

    Ok(Json(
        subscriptions.iter().map(subscription_to_response).collect(),
    ))
}

/// GET /subscribe/{id} - Fetches one subscription.
///
/// # Errors
///
/// - `400 Bad Request` - The id is not a positive integer
/// - `404 Not Found` - No subscription has this id
/// - `500 Internal Server Error` - The store failed
pub async fn get_subscription(
    State(dependencies): State<AppDependencies>,
    Path(raw_id): Path<String>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let id = parse_subscription_id(&raw_id)?;

    dependencies.store().find_by_id(id).await?.map_or_else(
        || Err(ApiError::NotFound(format!("subscription {id} not found"))),
        |subscription| Ok(Json(subscription_to_response(&subscription))),
    )
}

/// POST /subscribe - Creates a subscription.
///
/// # Errors
///
/// - `400 Bad Request` - Malformed JSON or a field fails validation
/// - `500 Internal Server Error` - The store failed
pub async fn create_subscription(
    State(dependencies): State<AppDependencies>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), ApiError> {
    let Json(request) = body?;
    let draft = request_to_draft(&request)?;

    let subscription = dependencies.store().insert(draft).await?;
    info!(
        id = %subscription.id,
        user_id = %subscription.user_id,
        service_name = %subscription.service_name,
        "Created subscription"
    );

    Ok((
        StatusCode::CREATED,
        Json(subscription_to_response(&subscription)),
    ))
}

/// PUT /subscribe/{id} - Replaces a subscription, creating it under this id
/// when it does not exist.
///
/// # Errors
///
/// - `400 Bad Request` - Malformed id, malformed JSON or a field fails validation
/// - `500 Internal Server Error` - The store failed
pub async fn update_subscription(
    State(dependencies): State<AppDependencies>,
    Path(raw_id): Path<String>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), ApiError> {
    let id = parse_subscription_id(&raw_id)?;
    let Json(request) = body?;
    let draft = request_to_draft(&request)?;
    let store = dependencies.store();

    if let Some(subscription) = store.update(id, draft.clone()).await? {
        info!(id = %subscription.id, "Updated subscription");
        return Ok((StatusCode::OK, Json(subscription_to_response(&subscription))));
    }

    let subscription = store.insert_with_id(id, draft).await?;
    info!(id = %subscription.id, "Created subscription on update of missing id");

    Ok((
        StatusCode::CREATED,
        Json(subscription_to_response(&subscription)),
    ))
}

/// DELETE /subscribe/{id} - Removes a subscription.
///
/// Responds `204 No Content` whether or not a record was stored under the id.
///
/// # Errors
///
/// - `400 Bad Request` - The id is not a positive integer
/// - `500 Internal Server Error` - The store failed
pub async fn delete_subscription(
    State(dependencies): State<AppDependencies>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_subscription_id(&raw_id)?;

    let removed = dependencies.store().delete(id).await?;
    info!(id = %id, removed, "Deleted subscription");

    Ok(StatusCode::NO_CONTENT)
}
