//! Order items and the records echoed back by status changes.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::InvalidValue;
use super::identifiers::{OrderId, OrderItemId};

/// How a packed item leaves the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    /// Seller ships directly to the customer.
    Dropship,
    /// Carrier picks up from the seller.
    Pickup,
    /// Seller sends the item to a marketplace warehouse.
    SendToWarehouse,
}

impl DeliveryType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dropship => "dropship",
            Self::Pickup => "pickup",
            Self::SendToWarehouse => "send_to_warehouse",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropship" => Ok(Self::Dropship),
            "pickup" => Ok(Self::Pickup),
            "send_to_warehouse" => Ok(Self::SendToWarehouse),
            other => Err(InvalidValue::new("delivery type", other)),
        }
    }
}

/// A single line within an order.
///
/// Items reference their order by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Remote item identifier.
    pub order_item_id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Shop identifier.
    pub shop_id: Option<String>,
    /// Product name.
    pub name: Option<String>,
    /// Seller SKU.
    pub sku: Option<String>,
    /// Marketplace SKU.
    pub shop_sku: Option<String>,
    /// Shipping type.
    pub shipping_type: Option<String>,
    /// Listed item price.
    pub item_price: Option<Decimal>,
    /// Price actually paid.
    pub paid_price: Option<Decimal>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Tax included in the price.
    pub tax_amount: Option<Decimal>,
    /// Shipping charged to the customer.
    pub shipping_amount: Option<Decimal>,
    /// Voucher discount.
    pub voucher_amount: Option<Decimal>,
    /// Voucher code.
    pub voucher_code: Option<String>,
    /// Item status. Kept verbatim; item statuses are a superset of order statuses.
    pub status: String,
    /// Carrier handling the shipment.
    pub shipment_provider: Option<String>,
    /// Whether the item is delivered digitally.
    pub is_digital: Option<bool>,
    /// Carrier tracking code. `Some("")` and `None` are different answers.
    pub tracking_code: Option<String>,
    /// Cancellation or failure reason.
    pub reason: Option<String>,
    /// Free-form detail for `reason`.
    pub reason_detail: Option<String>,
    /// Purchase order id assigned when packed.
    pub purchase_order_id: Option<String>,
    /// Purchase order number assigned when packed.
    pub purchase_order_number: Option<String>,
    /// Package id assigned when packed.
    pub package_id: Option<String>,
    /// Latest time by which the item must ship.
    pub promised_shipping_time: Option<String>,
    /// Creation time.
    pub created_at: Option<NaiveDateTime>,
    /// Last update time.
    pub updated_at: Option<NaiveDateTime>,
}

/// Per-item acknowledgement returned by the pack / ready-to-ship actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemStatusUpdate {
    /// Item the update applies to, when echoed.
    pub order_item_id: Option<OrderItemId>,
    /// Purchase order id.
    pub purchase_order_id: Option<String>,
    /// Purchase order number.
    pub purchase_order_number: Option<String>,
    /// Package id.
    pub package_id: Option<String>,
}
