//! HTTP API layer built on axum.
//!
//! - `dto` - Wire shapes and their conversion to domain types
//! - `handlers` - Endpoint implementations
//! - `middleware` - Error mapping
//! - `routes` - Router assembly

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ApiError;
pub use routes::create_router;
