//! Application layer: orchestration between the store and the domain.

pub mod queries;

pub use queries::calculate_total_cost;
