//! Subscriber identifier value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    /// The provided string is not a valid UUID.
    #[error("invalid user_id '{0}', expected a UUID")]
    InvalidUuidFormat(String),
}

/// UUID of the user who owns a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parses a user id from its textual UUID form.
    ///
    /// # Errors
    ///
    /// Returns [`UserIdError::InvalidUuidFormat`] if the string is not a UUID.
    pub fn parse(value: &str) -> Result<Self, UserIdError> {
        Uuid::from_str(value.trim())
            .map(Self)
            .map_err(|_| UserIdError::InvalidUuidFormat(value.to_string()))
    }

    /// Generates a random (v4) user id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_accepts_hyphenated_uuid() {
        let id = UserId::parse("60601fee-2bf1-4721-ae6f-7636e79a0cba").unwrap();

        assert_eq!(id.to_string(), "60601fee-2bf1-4721-ae6f-7636e79a0cba");
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("60601fee-2bf1-4721-ae6f")]
    fn parse_rejects_invalid_uuid(#[case] input: &str) {
        assert_eq!(
            UserId::parse(input),
            Err(UserIdError::InvalidUuidFormat(input.to_string()))
        );
    }

    #[rstest]
    fn generate_produces_distinct_ids() {
        assert_ne!(UserId::generate(), UserId::generate());
    }
}
