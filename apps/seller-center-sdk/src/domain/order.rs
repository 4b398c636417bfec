//! Orders as returned by `GetOrder` / `GetOrders`.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::InvalidValue;
use super::identifiers::OrderId;

/// Order status as understood by the seller center.
///
/// Orders report one status per distinct item status, so an order with
/// one shipped and one canceled item carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting seller action.
    Pending,
    /// Canceled by the customer or the seller.
    Canceled,
    /// Packed and waiting for pickup.
    ReadyToShip,
    /// Delivered to the customer.
    Delivered,
    /// Returned by the customer.
    Returned,
    /// Handed over to the carrier.
    Shipped,
    /// Delivery failed.
    Failed,
}

impl OrderStatus {
    /// Every status the API accepts, in wire order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Canceled,
        Self::ReadyToShip,
        Self::Delivered,
        Self::Returned,
        Self::Shipped,
        Self::Failed,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Canceled => "canceled",
            Self::ReadyToShip => "ready_to_ship",
            Self::Delivered => "delivered",
            Self::Returned => "returned",
            Self::Shipped => "shipped",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidValue::new("order status", s))
    }
}

/// Billing or shipping address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Primary phone.
    pub phone: Option<String>,
    /// Secondary phone.
    pub phone2: Option<String>,
    /// Address line 1.
    pub address1: Option<String>,
    /// Address line 2.
    pub address2: Option<String>,
    /// Address line 3.
    pub address3: Option<String>,
    /// Address line 4.
    pub address4: Option<String>,
    /// Address line 5.
    pub address5: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub post_code: Option<String>,
    /// Country.
    pub country: Option<String>,
}

/// An order on the seller center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Remote order identifier.
    pub order_id: OrderId,
    /// Human-facing order number.
    pub order_number: String,
    /// Customer first name.
    pub customer_first_name: Option<String>,
    /// Customer last name.
    pub customer_last_name: Option<String>,
    /// Payment method name.
    pub payment_method: Option<String>,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// Delivery information.
    pub delivery_info: Option<String>,
    /// Order total.
    pub price: Option<Decimal>,
    /// Whether the order is a gift.
    pub gift_option: Option<bool>,
    /// Gift message.
    pub gift_message: Option<String>,
    /// Voucher code applied to the order.
    pub voucher_code: Option<String>,
    /// Creation time, in the seller center's wall-clock zone.
    pub created_at: NaiveDateTime,
    /// Last update time, in the seller center's wall-clock zone.
    pub updated_at: NaiveDateTime,
    /// Billing address.
    pub address_billing: Option<Address>,
    /// Shipping address.
    pub address_shipping: Option<Address>,
    /// National registration number of the customer.
    pub national_registration_number: Option<String>,
    /// Number of items in the order.
    pub items_count: Option<u32>,
    /// Latest time by which the order must ship.
    pub promised_shipping_time: Option<String>,
    /// Item statuses present in the order.
    pub statuses: Vec<OrderStatus>,
}

impl Order {
    /// Returns true if any item in the order has the given status.
    #[must_use]
    pub fn has_status(&self, status: OrderStatus) -> bool {
        self.statuses.contains(&status)
    }
}
