//! Domain layer for the subscription aggregator.
//!
//! Pure types and functions with no I/O:
//!
//! - [`value_objects`] - Self-validating values (ids, names, cost, months)
//! - [`subscription`] - The subscription entity and its validated draft
//! - [`proration`] - Total-cost computation over a query period

pub mod proration;
pub mod subscription;
pub mod value_objects;

pub use proration::{Period, prorated_cost, total_cost};
pub use subscription::{Subscription, SubscriptionDraft, SubscriptionError};
pub use value_objects::*;
