//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Monsters and afflictions each get a strongly-typed ID so the two can never
//! be mixed up at compile time. All IDs use UUID v7 (time-ordered), so the
//! store's insertion order and ID order agree.
//!
//! The [`Display`](core::fmt::Display) form is the lowercase hyphenated UUID.
//! Integrity keys are computed over that form, so it must stay stable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a monster held by the store.
    MonsterId
}

define_id! {
    /// Unique identifier for a single damage or heal affliction.
    AfflictionId
}
