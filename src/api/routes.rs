//! Route configuration for the subscription API.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /subscriptions | `list_subscriptions` |
//! | GET | /subscribe/{id} | `get_subscription` |
//! | POST | /subscribe | `create_subscription` |
//! | PUT | /subscribe/{id} | `update_subscription` |
//! | DELETE | /subscribe/{id} | `delete_subscription` |
//! | GET | /total-cost | `get_total_cost` |
//! | GET | /health | `health_check` |

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::HealthResponse;
use crate::api::handlers::{
    create_subscription, delete_subscription, get_subscription, get_total_cost,
    list_subscriptions, update_subscription,
};
use crate::infrastructure::AppDependencies;

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Creates the router with all API routes bound to `dependencies`.
///
/// Request tracing is layered on by the binary.
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        .route("/subscriptions", get(list_subscriptions))
        .route("/subscribe", post(create_subscription))
        .route(
            "/subscribe/{id}",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route("/total-cost", get(get_total_cost))
        .route("/health", get(health_check))
        .with_state(dependencies)
}
