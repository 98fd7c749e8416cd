//! Subscription aggregator.
//!
//! A REST service that stores user subscriptions and prorates their cost
//! over a queried range of months.
//!
//! - [`domain`] - Value objects, the subscription entity and the proration engine
//! - [`application`] - The total-cost query
//! - [`infrastructure`] - Configuration, stores and dependency wiring
//! - [`api`] - axum routes, handlers and DTOs

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
