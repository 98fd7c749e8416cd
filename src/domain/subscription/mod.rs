//! Subscription entity, its validated draft and domain errors.

mod entity;
mod errors;

pub use entity::{Subscription, SubscriptionDraft, days_between};
pub use errors::SubscriptionError;
