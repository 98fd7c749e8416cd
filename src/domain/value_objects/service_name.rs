//! Service name value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length accepted by the `service_name` column.
pub const SERVICE_NAME_MAX_LENGTH: usize = 255;

/// Validation errors for [`ServiceName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceNameError {
    /// The name is empty or whitespace only.
    #[error("service_name must not be empty")]
    Empty,
    /// The name does not fit the storage column.
    #[error("service_name must be at most {SERVICE_NAME_MAX_LENGTH} characters, got {0}")]
    TooLong(usize),
}

/// Name of the subscribed service, e.g. "Yandex Plus".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a service name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceNameError`] for blank or oversized names.
    pub fn new(value: &str) -> Result<Self, ServiceNameError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ServiceNameError::Empty);
        }
        let length = trimmed.chars().count();
        if length > SERVICE_NAME_MAX_LENGTH {
            return Err(ServiceNameError::TooLong(length));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
