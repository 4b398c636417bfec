//! Strongly-typed identifiers for seller center entities.
//!
//! The remote API numbers orders and order items with unsigned integers.
//! Wrapping them keeps an order id from being passed where an item id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the numeric value.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(OrderId, "Seller center identifier for an order.");
define_id!(OrderItemId, "Seller center identifier for a single order line.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_display() {
        let id = OrderId::new(1_234_567);
        assert_eq!(id.to_string(), "1234567");
        assert_eq!(id.value(), 1_234_567);
    }

    #[test]
    fn order_item_id_parses_with_surrounding_whitespace() {
        let id: OrderItemId = " 42 ".parse().unwrap();
        assert_eq!(id, OrderItemId::new(42));
    }

    #[test]
    fn order_item_id_rejects_non_numeric() {
        assert!("abc".parse::<OrderItemId>().is_err());
        assert!("-1".parse::<OrderItemId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let ids = vec![OrderItemId::new(1), OrderItemId::new(2), OrderItemId::new(3)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[1,2,3]");
    }
}
