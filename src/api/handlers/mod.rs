//! HTTP handlers.
//!
//! Handlers only orchestrate: parse input through the DTO transformers,
//! call the store or the application layer, and map the result.

pub mod subscription;
pub mod total_cost;

pub use subscription::{
    create_subscription, delete_subscription, get_subscription, list_subscriptions,
    update_subscription,
};
pub use total_cost::get_total_cost;
