use std::fmt;

use serde::{Deserialize, Serialize};

/// Newtype over the protocol's integer ids.
///
/// The server addresses every entity by a signed integer; wrapping them keeps
/// a room id from being handed to an api that wants a user id.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|_| crate::error::DomainError::invalid_id(s))
            }
        }
    };
}

// Core entity ids
define_id!(RoomId);
define_id!(UserId);
define_id!(IssueId);
define_id!(ItemId);

/// Index of an object inside a room. Units (avatars, bots, pets) and
/// furniture live in separate index spaces; `RoomObjectCategory` carries the
/// distinction alongside the id wherever both can occur.
define_id!(ObjectId);
