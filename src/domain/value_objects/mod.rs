//! Value objects for the subscription domain.
//!
//! Every value object validates its input in a smart constructor, so an
//! instance is always well-formed:
//!
//! - [`SubscriptionId`] - Positive store-assigned id
//! - [`UserId`] - Subscriber UUID
//! - [`ServiceName`] - Non-blank service name
//! - [`Cost`] - Non-negative total price
//! - [`MonthDate`] - Date truncated to the first of a month (`YYYY-MM`)

mod cost;
mod month_date;
mod service_name;
mod subscription_id;
mod user_id;

pub use cost::{Cost, CostError};
pub use month_date::{MONTH_FORMAT, MonthDate, MonthDateError};
pub use service_name::{SERVICE_NAME_MAX_LENGTH, ServiceName, ServiceNameError};
pub use subscription_id::{SubscriptionId, SubscriptionIdError};
pub use user_id::{UserId, UserIdError};
