//! Conversions between wire DTOs and domain types.
//!
//! Pure functions; validation failures come back as [`SubscriptionError`].

use super::requests::{SubscriptionRequest, TotalCostQuery};
use super::responses::SubscriptionResponse;
use crate::domain::{
    Cost, MonthDate, Period, ServiceName, Subscription, SubscriptionDraft, SubscriptionError,
    SubscriptionId, UserId,
};
use crate::infrastructure::SubscriptionFilter;

/// Returns the trimmed value, or `None` when it is absent or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn required<'a>(
    value: Option<&'a String>,
    field: &'static str,
) -> Result<&'a str, SubscriptionError> {
    non_blank(value.map(String::as_str)).ok_or(SubscriptionError::MissingField(field))
}

fn parse_month(value: &str, field: &'static str) -> Result<MonthDate, SubscriptionError> {
    MonthDate::parse(value).map_err(|source| SubscriptionError::invalid_date(field, source))
}

/// Parses the `{id}` path segment.
///
/// # Errors
///
/// Returns [`SubscriptionError::InvalidId`] unless `raw` is a positive integer.
pub fn parse_subscription_id(raw: &str) -> Result<SubscriptionId, SubscriptionError> {
    Ok(raw.parse::<SubscriptionId>()?)
}

/// Validates a create/update body into a draft.
///
/// # Errors
///
/// Returns the first validation failure, checking fields in body order.
pub fn request_to_draft(
    request: &SubscriptionRequest,
) -> Result<SubscriptionDraft, SubscriptionError> {
    let user_id = UserId::parse(required(request.user_id.as_ref(), "user_id")?)?;
    let service_name = ServiceName::new(required(request.service_name.as_ref(), "service_name")?)?;
    let cost = Cost::new(request.cost.ok_or(SubscriptionError::MissingField("cost"))?)?;
    let start_date = parse_month(
        required(request.start_date.as_ref(), "start_date")?,
        "start_date",
    )?;
    let end_date = parse_month(required(request.end_date.as_ref(), "end_date")?, "end_date")?;

    SubscriptionDraft::new(service_name, user_id, cost, start_date, end_date)
}

/// Validates the total-cost query string into a store filter.
///
/// The period runs from the first day of `start_date` to the last day of
/// `end_date`.
///
/// # Errors
///
/// Returns a validation failure for missing or malformed dates, a reversed
/// range, or a malformed `user_id`.
pub fn query_to_filter(query: &TotalCostQuery) -> Result<SubscriptionFilter, SubscriptionError> {
    let start_date = parse_month(
        required(query.start_date.as_ref(), "start_date")?,
        "start_date",
    )?;
    let end_date = parse_month(required(query.end_date.as_ref(), "end_date")?, "end_date")?;
    let period = Period::from_months(start_date, end_date)?;

    let user_id = non_blank(query.user_id.as_deref())
        .map(UserId::parse)
        .transpose()?;
    let service_name = non_blank(query.service_name.as_deref())
        .map(ServiceName::new)
        .transpose()?;

    Ok(SubscriptionFilter::for_period(period)
        .with_user_id(user_id)
        .with_service_name(service_name))
}

#[must_use]
pub fn subscription_to_response(subscription: &Subscription) -> SubscriptionResponse {
    SubscriptionResponse {
        id: subscription.id.value(),
        service_name: subscription.service_name.as_str().to_string(),
        cost: subscription.cost.value(),
        user_id: subscription.user_id.to_string(),
        start_date: subscription.start_date.to_string(),
        end_date: subscription.end_date.to_string(),
    }
}
