//! Index-based ID types for type-safe arena references.
//!
//! Each ID type wraps a `u32` arena index to prevent cross-type confusion.
//! A `NodeId` cannot be accidentally used where a `CallableId` is expected.
//! IDs are only handed out by the owning program model, so indexing with
//! them is infallible within that model.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new ID from a raw arena index.
            pub fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the index as a `usize` for arena access.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// AST node identifier: index into a program model's node arena.
    NodeId
);

define_id!(
    /// Declared type identifier: index into a program model's type table.
    TypeId
);

define_id!(
    /// Callable unit identifier: index into a program model's callable table.
    CallableId
);
