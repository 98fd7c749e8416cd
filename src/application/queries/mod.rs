//! Read-side operations that combine the store with the domain engine.

mod total_cost;

pub use total_cost::calculate_total_cost;
