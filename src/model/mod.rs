//! Pure data structures (DTOs) exchanged with the storefront backend.
//!
//! Everything here is plain `serde` data: no I/O and no business rules. The
//! identifiers are newtypes so a menu item id can never be passed where a
//! restaurant id is expected.

pub mod menu;
pub mod order;
pub mod restaurant;

pub use menu::*;
pub use order::*;
pub use restaurant::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Type-safe identifier for Restaurants.
    RestaurantId
);
string_id!(
    /// Type-safe identifier for menu items (and the cart lines built from them).
    ItemId
);
string_id!(
    /// Identifier returned by the backend for a placed order.
    OrderId
);

/// Rounds a currency amount to two decimal places, the precision sent on the wire.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
