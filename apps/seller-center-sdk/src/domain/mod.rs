//! Domain Layer
//!
//! Records and enumerations of the seller center order API. Nothing here
//! knows about HTTP or XML.

mod errors;
mod failure_reason;
mod identifiers;
mod order;
mod order_item;

pub use errors::InvalidValue;
pub use failure_reason::FailureReason;
pub use identifiers::{OrderId, OrderItemId};
pub use order::{Address, Order, OrderStatus};
pub use order_item::{DeliveryType, OrderItem, OrderItemStatusUpdate};
