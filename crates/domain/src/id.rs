//! Typed identifier newtypes backed by opaque strings.
//!
//! Ids are minted by the server; fresh ids use the simple UUID format
//! (32 lowercase hex characters, no dashes).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Access the raw string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Parse the wire convention where `""` means "none".
            #[must_use]
            pub fn parse_optional(raw: &str) -> Option<Self> {
                if raw.is_empty() {
                    None
                } else {
                    Some(Self(raw.to_string()))
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Playbook`](crate::playbook::Playbook).
    PlaybookId
);

define_id!(
    /// Unique identifier for a team; scopes user search.
    TeamId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

/// Serde helpers for an optional id encoded as `""` when absent.
pub mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UserId;

    /// Serialize `None` as `""`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<UserId>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_ref().map_or("", UserId::as_str))
    }

    /// Deserialize `""` (or a missing value) as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not a string.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<UserId>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(UserId::parse_optional))
    }
}
