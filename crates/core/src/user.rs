//! The user entity and its strongly-typed identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user row. Assigned by the store, immutable afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    /// Parse a path segment into an id.
    ///
    /// The error message carries the offending segment so clients can see
    /// exactly what they sent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| DomainError::invalid_id(format!("invalid id given {s}")))?;
        Ok(Self(raw))
    }
}

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Creation parameters: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn user_id_parses_numeric_segments() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id, UserId::new(42));
    }

    #[test]
    fn user_id_parse_error_names_the_bad_segment() {
        let err = "abc".parse::<UserId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid id given abc");
    }

    #[test]
    fn user_serializes_with_lowercase_keys() {
        let user = User {
            id: UserId::new(7),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "name": "Alice", "email": "alice@example.com"})
        );
    }

    proptest! {
        #[test]
        fn user_id_display_parse_round_trip(raw in any::<i64>()) {
            let id = UserId::new(raw);
            let parsed: UserId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
