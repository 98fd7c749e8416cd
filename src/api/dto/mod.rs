//! Data transfer objects for the HTTP API.

pub mod requests;
pub mod responses;
pub mod transformers;

pub use requests::{SubscriptionRequest, TotalCostQuery};
pub use responses::{ErrorResponse, HealthResponse, SubscriptionResponse, TotalCostResponse};
pub use transformers::{
    parse_subscription_id, query_to_filter, request_to_draft, subscription_to_response,
};
