//! Strongly-typed ID newtypes for backend entities.
//!
//! The backend identifies users and events with integer primary keys. Wrapping
//! them prevents passing an `EventId` where a `UserId` is expected, which
//! matters for ownership checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Defines an integer ID newtype with serde and OpenAPI support.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = i64)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Backend user primary key.
    UserId
);

define_id!(
    /// Backend event primary key.
    EventId
);
